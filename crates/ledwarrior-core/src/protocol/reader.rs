use super::error::MessageError;
use super::header::Header;
use super::layout;
use super::status::StatusFlags;

pub struct MessageReader<'a> {
    header: Header,
    frame: &'a [u8],
}

impl<'a> MessageReader<'a> {
    pub fn new(header: Header, frame: &'a [u8]) -> Self {
        Self { header, frame }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), MessageError> {
        if self.frame.len() < needed {
            return Err(self.too_short(needed));
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, MessageError> {
        self.frame
            .get(offset)
            .copied()
            .ok_or_else(|| self.too_short(offset + 1))
    }

    pub fn read_pair(&self, range: std::ops::Range<usize>) -> Result<[u8; 2], MessageError> {
        match self.frame.get(range.clone()) {
            Some(&[first, second]) => Ok([first, second]),
            _ => Err(self.too_short(range.end)),
        }
    }

    pub fn read_status(&self) -> Result<StatusFlags, MessageError> {
        self.read_u8(layout::STATUS_OFFSET).map(StatusFlags::new)
    }

    fn too_short(&self, needed: usize) -> MessageError {
        MessageError::TooShort {
            header: self.header,
            needed,
            actual: self.frame.len(),
        }
    }
}
