/// Append-only bit stream, most significant bit of each byte first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    buffer: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`, MSB first
    pub fn put(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32);
        for i in (0..width).rev() {
            self.put_bit((value >> i) & 1 == 1);
        }
    }

    /// Append one bit
    pub fn put_bit(&mut self, bit: bool) {
        let byte_index = self.length / 8;
        if self.buffer.len() <= byte_index {
            self.buffer.push(0);
        }
        if bit {
            self.buffer[byte_index] |= 0x80 >> (self.length % 8);
        }
        self.length += 1;
    }

    /// Bit at absolute position `index`
    pub fn get(&self, index: usize) -> bool {
        (self.buffer[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Number of bits written
    pub fn len_in_bits(&self) -> usize {
        self.length
    }

    /// True if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Backing bytes; the unused tail of the last byte is zero
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume the buffer, returning its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_msb_first() {
        let mut bits = BitBuffer::new();
        bits.put(0b0100, 4);
        bits.put(5, 8);
        assert_eq!(bits.len_in_bits(), 12);
        assert_eq!(bits.as_bytes(), &[0b0100_0000, 0b0101_0000]);
        assert!(!bits.get(0));
        assert!(bits.get(1));
        assert!(bits.get(9));
        assert!(bits.get(11));
    }

    #[test]
    fn test_put_bit_grows_by_byte() {
        let mut bits = BitBuffer::new();
        assert!(bits.is_empty());
        for _ in 0..8 {
            bits.put_bit(true);
        }
        assert_eq!(bits.as_bytes().len(), 1);
        bits.put_bit(false);
        assert_eq!(bits.as_bytes().len(), 2);
        assert_eq!(bits.into_bytes(), vec![0xFF, 0x00]);
    }

    #[test]
    fn test_zero_width_put_is_noop() {
        let mut bits = BitBuffer::new();
        bits.put(0xFFFF, 0);
        assert!(bits.is_empty());
    }
}
