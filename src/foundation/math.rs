pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Drop the fractional part, rounding toward zero (`-3.9 -> -3`).
pub(crate) fn trunc_i32(v: f64) -> i32 {
    v.trunc() as i32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
