use super::{sign_bias_64, ArithmeticShiftRight};

/// Scalar form of the logical-shift-plus-bias emulation.
///
/// Mirrors the SIMD emulations operation for operation, which makes it the oracle their
/// tests compare against. Row kernels running on scalar hardware just use `>>` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmulatedSrai64 {
    amount: u32,
    bias: i64,
}

impl EmulatedSrai64 {
    /// Creates the shift for a fixed `amount`.
    ///
    /// `amount` must be less than 64.
    #[inline(always)]
    pub const fn new(amount: u32) -> Self {
        debug_assert!(amount < 64, "shift amount must be less than 64");
        Self {
            amount,
            bias: sign_bias_64(amount),
        }
    }

    /// Safe equivalent of [`ArithmeticShiftRight::shift_right`].
    #[inline(always)]
    pub const fn apply(&self, value: i64) -> i64 {
        let shifted = ((value as u64) >> self.amount) as i64;
        (shifted ^ self.bias).wrapping_sub(self.bias)
    }
}

impl ArithmeticShiftRight for EmulatedSrai64 {
    type Lanes = i64;
    const LANES: usize = 1;

    #[inline(always)]
    unsafe fn shift_right(&self, value: i64) -> i64 {
        self.apply(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intrinsics::arithmetic_shift::tests::{boundary_values, floor_div_pow2};

    #[test]
    fn matches_floor_division_for_every_amount() {
        for amount in 0..64 {
            let shift = EmulatedSrai64::new(amount);
            for value in boundary_values() {
                assert_eq!(
                    shift.apply(value),
                    floor_div_pow2(value, amount),
                    "value {value:#x} >> {amount}"
                );
            }
        }
    }

    #[test]
    fn matches_native_shift_for_every_amount() {
        for amount in 0..64 {
            let shift = EmulatedSrai64::new(amount);
            for value in boundary_values() {
                assert_eq!(unsafe { shift.shift_right(value) }, value >> amount);
            }
        }
    }

    #[test]
    fn negative_values_round_down_not_towards_zero() {
        let shift = EmulatedSrai64::new(2);
        assert_eq!(shift.apply(-1), -1);
        assert_eq!(shift.apply(-5), -2);
        assert_ne!(shift.apply(-5), -5 / 4);
    }
}
