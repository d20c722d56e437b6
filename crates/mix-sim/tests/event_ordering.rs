use mix_core::errors::MixError;
use mix_core::VertexId;
use mix_sim::{Event, EventQueue};
use proptest::prelude::*;

fn edge_event(time: f64, from: usize, to: usize) -> Event {
    Event::new(time, VertexId::from_index(from), VertexId::from_index(to)).unwrap()
}

#[test]
fn pops_in_time_order() {
    let mut queue = EventQueue::new();
    queue.schedule(edge_event(3.0, 0, 1));
    queue.schedule(edge_event(1.0, 2, 3));
    queue.schedule(edge_event(2.0, 4, 5));

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek_time(), Some(1.0));
    let times: Vec<f64> = (0..3).map(|_| queue.pop_earliest().unwrap().time()).collect();
    assert_eq!(times, vec![1.0, 2.0, 3.0]);
    assert!(queue.is_empty());
    assert_eq!(queue.scheduled_total(), 3);
}

#[test]
fn equal_times_pop_in_insertion_order() {
    let mut queue = EventQueue::new();
    queue.schedule(edge_event(1.0, 7, 8));
    queue.schedule(edge_event(1.0, 0, 1));
    queue.schedule(edge_event(0.5, 5, 6));
    queue.schedule(edge_event(1.0, 3, 4));

    assert_eq!(queue.pop_earliest().unwrap().from_vertex(), VertexId::from_index(5));
    // Lower vertex ids do not jump ahead: ties resolve FIFO.
    assert_eq!(queue.pop_earliest().unwrap().from_vertex(), VertexId::from_index(7));
    assert_eq!(queue.pop_earliest().unwrap().from_vertex(), VertexId::from_index(0));
    assert_eq!(queue.pop_earliest().unwrap().from_vertex(), VertexId::from_index(3));
}

#[test]
fn popping_an_empty_queue_fails() {
    let mut queue = EventQueue::new();
    let err = queue.pop_earliest().unwrap_err();
    match err {
        MixError::EmptyQueue(info) => assert_eq!(info.code, "empty-queue"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(queue.peek_time(), None);
}

#[test]
fn events_reject_invalid_times() {
    let a = VertexId::from_index(0);
    let b = VertexId::from_index(1);
    for time in [f64::NAN, f64::INFINITY, -0.5] {
        let err = Event::new(time, a, b).unwrap_err();
        assert_eq!(err.code(), "invalid-event-time");
    }
    let event = Event::new(0.0, a, b).unwrap();
    let later = event.reactivated_at(2.5).unwrap();
    assert_eq!(later.time(), 2.5);
    assert_eq!((later.from_vertex(), later.to_vertex()), (a, b));
}

proptest! {
    #[test]
    fn popped_times_are_non_decreasing(times in prop::collection::vec(0.0f64..1_000.0, 1..200)) {
        let mut queue = EventQueue::new();
        for (index, time) in times.iter().enumerate() {
            queue.schedule(edge_event(*time, index, index + 1));
        }
        let mut last = f64::NEG_INFINITY;
        while let Ok(event) = queue.pop_earliest() {
            prop_assert!(event.time() >= last);
            last = event.time();
        }
        prop_assert_eq!(queue.scheduled_total(), times.len() as u64);
    }
}
