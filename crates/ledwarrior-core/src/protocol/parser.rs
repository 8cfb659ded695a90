use super::error::MessageError;
use super::header::Header;
use super::layout;
use super::message::Message;
use super::reader::MessageReader;
use crate::frame::{BackwardFrame, ForwardFrame};

/// Decode an unstuffed frame into a message.
///
/// Unrecognised header values decode to [`Message::Unknown`]; only a
/// recognised header with a truncated payload is an error.
pub fn parse_message(frame: &[u8]) -> Result<Message, MessageError> {
    let value = *frame.get(layout::HEADER_OFFSET).ok_or(MessageError::Empty)?;
    let Some(header) = Header::from_u8(value) else {
        return Ok(Message::Unknown { header: value });
    };
    let reader = MessageReader::new(header, frame);

    let message = match header {
        Header::DaliCommand => Message::DaliCommand,
        Header::TimeframeExpired => Message::TimeframeExpired {
            status: reader.read_status()?,
        },
        Header::InvalidDaliFrame => Message::InvalidDaliFrame {
            status: reader.read_status()?,
        },
        Header::DaliRcv1Byte => {
            reader.require_len(layout::BACKWARD_FRAME_OFFSET + 1)?;
            Message::DaliRcv1Byte {
                status: reader.read_status()?,
                frame: BackwardFrame::new(reader.read_u8(layout::BACKWARD_FRAME_OFFSET)?),
            }
        }
        Header::DaliRcv2Bytes => Message::DaliRcv2Bytes {
            status: reader.read_status()?,
            frame: ForwardFrame::from_bytes(reader.read_pair(layout::FORWARD_FRAME_RANGE)?),
        },
        Header::Echo => Message::Echo {
            byte: reader.read_u8(layout::ECHO_OFFSET)?,
        },
    };
    Ok(message)
}
