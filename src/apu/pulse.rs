use crate::{
    counter::Counter,
    regs::{AudioDuty, AudioEnvelope, AudioPeriodHighCtrl, AudioSweep},
};

use super::parts;

/// Square/pulse channel, used for channel 1(with sweep) and channel 2.
#[derive(Default, bincode::Encode, bincode::Decode)]
pub(crate) struct PulseChannel {
    pub(crate) on: bool,
    pub(crate) output: u8,

    pub(crate) nx0: AudioSweep,
    pub(crate) nx1: AudioDuty,
    pub(crate) nx2: AudioEnvelope,
    pub(crate) period_low: u8,
    pub(crate) nx4: AudioPeriodHighCtrl,

    /// Channel 1 has a sweep unit, channel 2 does not.
    use_sweep: bool,

    sweep_ctr: Counter,
    sweep_enabled: bool,
    shadow_period: u32,

    envelope: parts::VolumeEnvelope,
    length_timer: parts::LengthTimer,
    divider: parts::PeriodDivider,
}

impl PulseChannel {
    pub(crate) fn new(use_sweep: bool) -> Self {
        Self {
            use_sweep,
            divider: parts::PeriodDivider::new(false),
            ..Default::default()
        }
    }

    /// DIV-APU tick, runs at 512 Hz.
    pub(crate) fn apu_tick(&mut self) {
        if self.use_sweep && self.sweep_enabled && self.nx0.pace != 0 {
            self.tick_sweep();
        }

        if self.nx4.length_enable == 1 {
            self.length_timer.tick();
            self.on = self.length_timer.is_active();
        }

        if !self.dac_enabled() {
            self.on = false;
        }

        self.envelope.tick();
    }

    pub(crate) fn tick(&mut self, dots: u32) {
        if self.nx4.trigger == 1 {
            self.trigger();
            return;
        }

        let s = parts::get_pwm_sample(self.nx1.duty, self.divider.sample_idx());
        self.output = s * self.envelope.volume();

        self.divider.tick(dots);
        if self.divider.is_reload_allowed() {
            self.divider.update_period(self.period_low, &self.nx4);
        }
    }

    pub(crate) fn trigger(&mut self) {
        self.nx4.trigger = 0;
        if !self.dac_enabled() {
            return;
        }

        self.on = true;
        self.divider.update_period(self.period_low, &self.nx4);
        self.envelope = parts::VolumeEnvelope::new(&self.nx2);

        if !self.length_timer.is_active() {
            self.length_timer = parts::LengthTimer::new(false, self.nx1.length_timer);
        }

        if self.use_sweep {
            self.setup_sweep();
        }
    }

    fn setup_sweep(&mut self) {
        self.shadow_period = self.divider.period();
        self.sweep_ctr = parts::new_period_sweep_counter(self.nx0.pace);
        self.sweep_enabled = self.nx0.pace != 0 || self.nx0.step != 0;

        if self.nx0.step == 0 {
            return;
        }

        let (_, overflowed) = parts::calc_new_period(self.shadow_period, &self.nx0);
        self.on = !overflowed;
    }

    fn tick_sweep(&mut self) {
        if self.sweep_ctr.tick(1) == 0 {
            return;
        }
        if self.nx0.step == 0 {
            return;
        }

        let (new, overflowed) = parts::calc_new_period(self.shadow_period, &self.nx0);
        if overflowed {
            self.on = false;
            return;
        }

        self.shadow_period = new;
        parts::set_period(&mut self.period_low, &mut self.nx4, new);

        // Redo the calculation for the overflow check but do not commit it.
        let (_, overflowed) = parts::calc_new_period(self.shadow_period, &self.nx0);
        self.on = !overflowed;
    }

    fn dac_enabled(&self) -> bool {
        !(self.nx2.direction == 0 && self.nx2.initial_volume == 0)
    }
}
