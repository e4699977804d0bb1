//! MBC3 real-time clock, anchored to the host wall clock rather than
//! ticked per emulated dot. A `dots`-driven RTC (the straightforward
//! approach) reads the host clock once per cartridge-clock call and
//! leaves every save state carrying a timestamp that's wrong the moment
//! it's loaded on another machine or even just resumed later; anchoring
//! instead means the clock only ever advances lazily, by folding in
//! whatever host time elapsed since the last sync, on the accesses that
//! actually need an up-to-date reading: a register read and the 0->1
//! latch write.

use std::time::{SystemTime, UNIX_EPOCH};

use bincode::{Decode, Encode};

const DAYS_MAX: u32 = 0x1FF; // 9-bits are used for day

#[derive(Encode, Decode)]
pub(crate) struct Mbc3Rtc {
    /// Host wall-clock time, in seconds since the Unix epoch, as of the
    /// last `sync_at` call.
    anchor_secs: u64,
    latched: Option<[u8; 5]>,
    clk: Clock,

    halt: bool,
    overflowed: bool,
}

impl Default for Mbc3Rtc {
    fn default() -> Self {
        Self {
            anchor_secs: 0,
            latched: None,
            clk: Clock::default(),
            halt: false,
            overflowed: false,
        }
    }
}

#[derive(Default, Encode, Decode)]
struct Clock {
    s: u32,
    m: u32,
    h: u32,
    d: u32,
}

impl Clock {
    fn tick(&mut self, seconds: u32) {
        let mut x = seconds;
        (self.s, x) = mod_add(self.s, x, 60);
        (self.m, x) = mod_add(self.m, x, 60);
        (self.h, x) = mod_add(self.h, x, 24);
        self.d = self.d.saturating_add(x);
    }
}

impl Mbc3Rtc {
    pub(crate) fn new() -> Self {
        Self {
            anchor_secs: now_secs(),
            ..Default::default()
        }
    }

    /// Folds in whatever host time elapsed since the last sync. Called
    /// before any register read and before a latch write takes effect,
    /// so the counters are never stale by more than the gap between two
    /// accesses.
    pub(crate) fn sync(&mut self) {
        self.sync_at(now_secs());
    }

    fn sync_at(&mut self, now: u64) {
        let elapsed = now.saturating_sub(self.anchor_secs);
        self.anchor_secs = now;

        if self.halt || elapsed == 0 {
            return;
        }

        // `elapsed` can exceed a day's worth of seconds after a long
        // pause (e.g. a save state reloaded a week later); `Clock::tick`
        // folds it in one call via `saturating_add` on the day counter.
        self.clk.tick(elapsed as u32);
        self.overflowed = self.clk.d > DAYS_MAX;
    }

    pub(crate) fn set_latching(&mut self, enable: bool) {
        if enable {
            self.sync();
            self.latched = Some(self.snapshot());
        } else {
            self.latched = None;
        }
    }

    fn snapshot(&self) -> [u8; 5] {
        [
            self.clk.s as u8,
            self.clk.m as u8,
            self.clk.h as u8,
            self.clk.d as u8,
            self.read_reg_c() as u8,
        ]
    }

    pub(crate) fn read(&mut self, reg: usize) -> u8 {
        if let Some(saved) = self.latched {
            return *saved.get(reg - 0x8).unwrap_or(&0xFF);
        }

        self.sync();
        (match reg {
            0x8 => self.clk.s,
            0x9 => self.clk.m,
            0xA => self.clk.h,
            0xB => self.clk.d,
            0xC => self.read_reg_c(),
            _ => 0xFF,
        }) as u8
    }

    pub(crate) fn write(&mut self, reg: usize, val: u8) {
        self.sync();
        let val = val as u32;
        match reg {
            0x8 => self.clk.s = val & mask(6),
            0x9 => self.clk.m = val & mask(6),
            0xA => self.clk.h = val & mask(5),
            0xB => self.clk.d = val,
            0xC => self.write_reg_c(val & (1 | 0b11 << 6)),
            _ => (),
        }
    }

    fn read_reg_c(&self) -> u32 {
        // MBC3 RTC 0xC register:
        // Bit 0: Day 8th bit, Bit 6: Halt, Bit 7: Overflow
        ((self.clk.d >> 8) & 1) | (self.halt as u32) << 6 | (self.overflowed as u32) << 7
    }

    fn write_reg_c(&mut self, val: u32) {
        if val & 1 == 1 {
            self.clk.d |= 1 << 8;
        } else {
            self.clk.d &= !(1 << 8);
        }

        self.halt = (val >> 6) & 1 == 1;
        self.overflowed = (val >> 7) & 1 == 1;
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

const fn mod_add(v: u32, u: u32, modulo: u32) -> (u32, u32) {
    ((v + u) % modulo, (v + u) / modulo)
}

#[inline(always)]
const fn mask(bits: u32) -> u32 {
    if bits == u32::BITS {
        !0
    } else {
        !(!0 << bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_at_folds_elapsed_seconds_into_the_clock() {
        let mut rtc = Mbc3Rtc::default();
        rtc.anchor_secs = 1_000;
        rtc.sync_at(1_000 + 90); // 1 minute 30 seconds

        assert_eq!(rtc.clk.m, 1);
        assert_eq!(rtc.clk.s, 30);
        assert_eq!(rtc.anchor_secs, 1_090);
    }

    #[test]
    fn halted_clock_still_advances_the_anchor_without_ticking() {
        let mut rtc = Mbc3Rtc::default();
        rtc.halt = true;
        rtc.anchor_secs = 1_000;
        rtc.sync_at(1_500);

        assert_eq!(rtc.clk.s, 0);
        assert_eq!(rtc.anchor_secs, 1_500);
    }

    #[test]
    fn day_counter_overflows_past_511_days() {
        let mut rtc = Mbc3Rtc::default();
        rtc.clk.d = DAYS_MAX;
        rtc.anchor_secs = 0;
        rtc.sync_at(86_400); // one day

        assert!(rtc.clk.d > DAYS_MAX);
        assert!(rtc.overflowed);
    }

    #[test]
    fn latch_snapshot_is_stable_until_unlatched() {
        let mut rtc = Mbc3Rtc::default();
        rtc.anchor_secs = 0;
        rtc.sync_at(5);
        rtc.latched = Some(rtc.snapshot());

        rtc.sync_at(500);
        // The live clock has moved on, but the latch still reports the
        // value captured at the moment it was taken.
        assert_eq!(*rtc.latched.unwrap().first().unwrap(), 5);
        assert_eq!(rtc.clk.s, 20); // (5 + 495) % 60

        rtc.set_latching(false);
        assert!(rtc.latched.is_none());
    }

    #[test]
    fn reg_c_reports_day_high_bit_halt_and_overflow() {
        let mut rtc = Mbc3Rtc::default();
        rtc.clk.d = 0x1FF + 3;
        rtc.overflowed = true;
        rtc.halt = true;

        let c = rtc.read_reg_c();
        assert_eq!(c & 1, 1); // day bit 8 set
        assert_eq!((c >> 6) & 1, 1); // halt
        assert_eq!((c >> 7) & 1, 1); // overflow
    }
}
