use day6::{Datastream, MESSAGE_MARKER_LEN, PACKET_MARKER_LEN};

#[test]
fn finds_markers_in_sample_streams() {
    let samples = [
        ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
        ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
        ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
        ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
    ];

    for (text, packet_end, message_end) in samples {
        let stream = Datastream::new(text).unwrap();
        assert_eq!(stream.marker_end(PACKET_MARKER_LEN), Some(packet_end));
        assert_eq!(stream.marker_end(MESSAGE_MARKER_LEN), Some(message_end));
    }
}

#[test]
fn short_stream_has_no_marker() {
    let stream = Datastream::new("aab").unwrap();

    assert_eq!(stream.marker_end(PACKET_MARKER_LEN), None);
}
