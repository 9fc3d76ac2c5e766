/// Read cursor over one packet's parameter bytes.
///
/// The budget is the smaller of the declared parameter length and the bytes
/// actually captured, so nothing past either end is ever read.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn with_budget(data: &'a [u8], budget: usize) -> Self {
        let len = core::cmp::min(budget, data.len());
        Self::new(&data[..len])
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        if n > self.remaining() {
            return None;
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Some(bytes)
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        self.take(1).map(|b| b[0])
    }

    /// Big-endian integer of 1 to 4 bytes.
    pub fn read_be(&mut self, n: usize) -> Option<u32> {
        if n == 0 || n > 4 {
            return None;
        }
        self.take(n).map(be_value)
    }

    pub fn read_le_u16(&mut self) -> Option<u16> {
        self.take(2).map(|b| u16::from_le_bytes([b[0], b[1]]))
    }

    /// Everything not consumed yet.
    pub fn rest(&mut self) -> &'a [u8] {
        let bytes = &self.data[self.pos..];
        self.pos = self.data.len();
        bytes
    }
}

pub fn be_value(bytes: &[u8]) -> u32 {
    bytes.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b))
}

pub fn le_value(bytes: &[u8]) -> u32 {
    bytes.iter().rev().fold(0u32, |acc, b| (acc << 8) | u32::from(*b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_clamped_to_data() {
        let data = [1u8, 2, 3];
        let mut cursor = ByteCursor::with_budget(&data, 10);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.take(4), None);
        assert_eq!(cursor.read_be(2), Some(0x0102));
        assert_eq!(cursor.rest(), &[3]);
        assert!(cursor.is_empty());
    }

    #[test]
    fn declared_length_limits_reads() {
        let data = [0x34u8, 0x12, 0xff];
        let mut cursor = ByteCursor::with_budget(&data, 2);
        assert_eq!(cursor.read_le_u16(), Some(0x1234));
        assert_eq!(cursor.read_u8(), None);
    }
}
