use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use proptest::prelude::*;

use ledwarrior_core::Transport;
use ledwarrior_core::protocol::{FrameDecoder, ReadBudget, layout, read_frame, stuff};

struct Wire(VecDeque<u8>);

impl Transport for Wire {
    fn read_byte(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        Ok(self.0.pop_front())
    }

    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.0.extend(bytes);
        Ok(())
    }
}

fn unbounded() -> ReadBudget {
    ReadBudget {
        max_bytes: usize::MAX,
        ..ReadBudget::default()
    }
}

fn noise() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        any::<u8>().prop_filter("no frame opener", |byte| {
            *byte != layout::START && *byte != layout::ESC
        }),
        0..64,
    )
}

proptest! {
    #[test]
    fn stuffed_payload_decodes_to_itself(payload in proptest::collection::vec(any::<u8>(), 0..128)) {
        let mut decoder = FrameDecoder::new();
        let decoded = stuff(&payload).into_iter().find_map(|byte| decoder.feed(byte));
        prop_assert_eq!(decoded, Some(payload));
    }

    #[test]
    fn stuffed_frame_has_single_markers(payload in proptest::collection::vec(any::<u8>(), 0..128)) {
        let stuffed = stuff(&payload);
        prop_assert_eq!(stuffed.first(), Some(&layout::START));
        prop_assert_eq!(stuffed.last(), Some(&layout::STOP));

        let inner = &stuffed[1..stuffed.len() - 1];
        let mut escaped = false;
        for &byte in inner {
            if escaped {
                escaped = false;
            } else {
                prop_assert!(byte != layout::START && byte != layout::STOP);
                escaped = byte == layout::ESC;
            }
        }
        prop_assert!(!escaped);
    }

    #[test]
    fn read_frame_resyncs_after_noise(
        garbage in noise(),
        payload in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut wire = Wire(VecDeque::new());
        wire.write_all(&garbage).unwrap();
        wire.write_all(&stuff(&payload)).unwrap();

        let frame = read_frame(&mut wire, &unbounded()).unwrap();
        prop_assert_eq!(frame, Some(payload));
        prop_assert!(wire.0.is_empty());
    }
}

#[test]
fn silence_yields_nothing_and_keeps_nothing() {
    let mut wire = Wire(VecDeque::new());
    let budget = ReadBudget::default();

    assert_eq!(read_frame(&mut wire, &budget).unwrap(), None);

    wire.write_all(&[layout::START, 0x01, 0x02]).unwrap();
    assert_eq!(read_frame(&mut wire, &budget).unwrap(), None);

    wire.write_all(&[0x03, layout::STOP]).unwrap();
    assert_eq!(read_frame(&mut wire, &budget).unwrap(), None);
}

#[test]
fn default_budget_matches_bridge_limits() {
    let budget = ReadBudget::default();
    assert_eq!(budget.max_bytes, 40);
    assert_eq!(budget.wait_cycles, 60);
    assert_eq!(budget.poll_interval, Duration::from_millis(1));
}
