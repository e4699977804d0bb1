//! IO-port register structures for conveninet reading and writing.

use crate::macros::bit_fields;

bit_fields! {
    /// Joypad/P1 register, only upper nibble is writable by user-code.
    /// In this register, rather unconventionally 0-bit means PRESSED,
    /// so complement bits before writng to the actual register.
    ///
    /// Lower 4-bits are set as: `ActionButtons` for `select_buttons`
    /// and `Dpad` for `select_dpad`.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct JoyPad<u8> {
        _0: 4,
        select_dpad: 1,
        select_buttons: 1,
    }
}

bit_fields! {
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct DPad<u8> {
        right: 1,
        left: 1,
        up: 1,
        down: 1,
    }
}

bit_fields! {
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct ActionButtons<u8> {
        a: 1,
        b: 1,
        select: 1,
        start: 1,
    }
}

bit_fields! {
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct SerialCtrl<u8> {
        clock_select: 1,
        clock_speed: 1,
        _0: 5,
        tx_enable: 1,
    }
}

bit_fields! {
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct LcdCtrl<u8> {
        /// In non-CGB mode this overrides win_enable
        /// and has meaning `BG_and_window_enable`.
        bg_win_priotity:1,
        obj_enable: 1,
        obj_size: 1,
        bg_tile_map: 1,
        /// Addressing mode for BG/Win tile index in tile data.
        bg_win_tile_data: 1,
        win_enable: 1,
        win_tile_map: 1,
        ppu_enable: 1,
    }
}

bit_fields! {
    #[derive(Debug)]
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct LcdStat<u8> {
        ppu_mode: 2,
        ly_eq_lyc: 1,
        // Conditions for STAT interrupt.
        mode0_int: 1,
        mode1_int: 1,
        mode2_int: 1,
        lyc_int: 1,
    }
}

bit_fields! {
    /// Background/Object color palette index.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct CgbPaletteIndex<u8> {
        addr: 6,
        _0: 1,
        auto_inc: 1,
    }
}

bit_fields! {
    /// `TIMA` register control information.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct TimerCtrl<u8> {
        clock_select: 2,
        enable: 1,
    }
}

// Audio registers, NRxx naming follows the standard hardware manual.
// --------------------------------------------------------------------

bit_fields! {
    /// NR10: channel 1 sweep.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioSweep<u8> {
        step: 3,
        direction: 1,
        pace: 3,
    }
}

bit_fields! {
    /// NR11/NR21: initial length timer + wave duty.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioDuty<u8> {
        length_timer: 6,
        duty: 2,
    }
}

bit_fields! {
    /// NR12/NR22/NR42: volume envelope.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioEnvelope<u8> {
        pace: 3,
        direction: 1,
        initial_volume: 4,
    }
}

bit_fields! {
    /// NR14/NR24/NR34: period high bits + length enable + trigger.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioPeriodHighCtrl<u8> {
        period_high: 3,
        _0: 3,
        length_enable: 1,
        trigger: 1,
    }
}

bit_fields! {
    /// NR44: noise channel has no period, only length enable + trigger.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioNoiseCtrl<u8> {
        _0: 6,
        length_enable: 1,
        trigger: 1,
    }
}

bit_fields! {
    /// NR30: wave channel DAC enable.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioWaveDac<u8> {
        _0: 7,
        dac_on: 1,
    }
}

bit_fields! {
    /// NR32: wave channel output level shift.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioWaveLevel<u8> {
        _0: 5,
        output_level: 2,
    }
}

bit_fields! {
    /// NR41: noise channel initial length timer.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioNoiseLen<u8> {
        length_timer: 6,
    }
}

bit_fields! {
    /// NR43: noise channel polynomial counter.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioNoisePoly<u8> {
        clock_divider: 3,
        lfsr_width_7bit: 1,
        clock_shift: 4,
    }
}

bit_fields! {
    /// NR50: master volume + VIN passthrough.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioMasterVol<u8> {
        vol_right: 3,
        vin_right: 1,
        vol_left: 3,
        vin_left: 1,
    }
}

bit_fields! {
    /// NR51: per-channel left/right panning.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioPanning<u8> {
        ch1_right: 1,
        ch2_right: 1,
        ch3_right: 1,
        ch4_right: 1,
        ch1_left: 1,
        ch2_left: 1,
        ch3_left: 1,
        ch4_left: 1,
    }
}

bit_fields! {
    /// NR52: master audio on/off + read-only per-channel status.
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct AudioMasterCtrl<u8> {
        ch1_on: 1,
        ch2_on: 1,
        ch3_on: 1,
        ch4_on: 1,
        _0: 3,
        audio_on: 1,
    }
}

bit_fields! {
    /// Interrupt data and Interrupt enable register fields.
    #[derive(Debug)]
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct IntData<u8> {
        vblank: 1,
        stat: 1,
        timer: 1,
        serial: 1,
        joypad: 1,
    }
}

impl IntData {
    /// Bits set in both `self` (IF) and `enable` (IE): the interrupts
    /// currently servicable.
    pub(crate) fn masked(self, enable: IntData) -> IntData {
        IntData::new(self.read() & enable.read())
    }
}

bit_fields! {
    /// Dual-speed(for CGB) speed switch register(KEY1).
    #[derive(bincode::Encode, bincode::Decode)]
    pub(crate) struct Key1<u8> {
        armed: 1,
        _1: 6,
        speed: 1,
    }
}