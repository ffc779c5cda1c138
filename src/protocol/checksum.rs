/// 8-bit one's complement sum: overflow out of the top bit wraps back into bit 0
pub fn ones_complement_sum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &byte| {
        let (sum, carry) = acc.overflowing_add(byte);
        // sum <= 0xFE whenever carry is set, so adding it back cannot overflow again
        sum + carry as u8
    })
}

/// Checksum byte appended to every packet
pub fn checksum(data: &[u8]) -> u8 {
    !ones_complement_sum(data)
}

/// A block followed by its checksum sums to all ones
pub fn verify(data: &[u8], expected: u8) -> bool {
    let (sum, carry) = ones_complement_sum(data).overflowing_add(expected);
    sum + carry as u8 == 0xFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_wraps_carry() {
        assert_eq!(ones_complement_sum(&[0xF0, 0x20]), 0x11);
        assert_eq!(ones_complement_sum(&[0xFF, 0x01]), 0x01);
        assert_eq!(ones_complement_sum(&[]), 0x00);
    }

    #[test]
    fn test_checksum_is_complement_of_sum() {
        assert_eq!(checksum(&[0x00]), 0xFF);
        assert_eq!(checksum(&[0x12, 0x34]), !0x46);
        assert_eq!(checksum(&[0xF0, 0x20]), 0xEE);
    }

    #[test]
    fn test_verify_accepts_matching_checksum() {
        let data = [0x00, 0xff, 0x00, 0x00, 0x01, 0x00, 0x80, 0x00];
        assert!(verify(&data, checksum(&data)));
    }

    #[test]
    fn test_verify_rejects_corruption() {
        let mut data = vec![0x21, 0x00, 0x80, 0x00, 0x22, 0xff, 0xff, 0xff];
        let sum = checksum(&data);
        data[3] ^= 0x04;
        assert!(!verify(&data, sum));
    }
}
