//! Unit tests for tr-routing.

use tr_catalogue::TransportCatalogue;
use tr_core::{GeoPoint, RoutingSettings};

use crate::{ItineraryItem, RouteResult, TransportRouter};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

/// 60 km/h = 1 km per minute, so ride minutes = road kilometres.
fn settings() -> RoutingSettings {
    RoutingSettings::new(5.0, 60.0)
}

fn add_stops(c: &mut TransportCatalogue, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        c.add_stop(name, GeoPoint::new(55.0 + i as f64 * 0.01, 37.0)).unwrap();
    }
}

/// Round-trip bus `A` over `S1 S2 S3`, 1000 m per segment.
fn three_stop_line() -> TransportCatalogue {
    let mut c = TransportCatalogue::new();
    add_stops(&mut c, &["S1", "S2", "S3"]);
    c.set_distance("S1", "S2", 1_000).unwrap();
    c.set_distance("S2", "S3", 1_000).unwrap();
    c.add_bus("A", &["S1", "S2", "S3"], true).unwrap();
    c
}

/// A small city:
///
/// ```text
///   A ──X── B ──X── C          X: linear        A B C
///           │                  Y: linear        B D E
///           Y                  Z: round trip    E F E
///           │
///           D ──Y── E ──Z── F
/// ```
fn city() -> TransportCatalogue {
    let mut c = TransportCatalogue::new();
    add_stops(&mut c, &["A", "B", "C", "D", "E", "F"]);
    for (a, b, m) in [
        ("A", "B", 1_500),
        ("B", "C", 2_500),
        ("C", "B", 2_700),
        ("B", "D", 4_000),
        ("D", "E", 1_200),
        ("E", "F", 3_300),
        ("F", "E", 3_100),
    ] {
        c.set_distance(a, b, m).unwrap();
    }
    c.add_bus("X", &["A", "B", "C"], false).unwrap();
    c.add_bus("Y", &["B", "D", "E"], false).unwrap();
    c.add_bus("Z", &["E", "F", "E"], true).unwrap();
    c
}

fn names(c: &TransportCatalogue) -> Vec<String> {
    c.stops().map(|(_, s)| s.name.clone()).collect()
}

// ── Graph construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use tr_core::{StopId, VertexId};

    use super::*;
    use crate::{EdgeKind, RoutingError, RoutingGraphBuilder};

    #[test]
    fn two_vertices_per_stop() {
        let c = city();
        let g = RoutingGraphBuilder::new(&c, settings()).build().unwrap();
        assert_eq!(g.graph().vertex_count(), 2 * c.stop_count());
        let v = g.stop_vertices(StopId(2)).unwrap();
        assert_eq!(v.wait_start, VertexId(4));
        assert_eq!(v.wait_end, VertexId(5));
    }

    #[test]
    fn one_wait_edge_per_stop() {
        let c = city();
        let g = RoutingGraphBuilder::new(&c, settings()).build().unwrap();
        let waits: Vec<_> = g
            .edge_kinds()
            .iter()
            .filter(|k| matches!(k, EdgeKind::Wait { .. }))
            .collect();
        assert_eq!(waits.len(), c.stop_count());

        for (stop, _) in c.stops() {
            let v = g.stop_vertices(stop).unwrap();
            let out: Vec<_> = g.graph().incident_edges(v.wait_start).collect();
            assert_eq!(out.len(), 1, "wait_start has only the wait edge");
            let edge = g.graph().edge(out[0]);
            assert_eq!(edge.to, v.wait_end);
            assert_eq!(edge.weight, 5.0);
            assert_eq!(*g.edge_kind(out[0]), EdgeKind::Wait { stop, duration: 5.0 });
        }
    }

    #[test]
    fn ride_edges_cover_every_position_pair() {
        let c = city();
        let g = RoutingGraphBuilder::new(&c, settings()).build().unwrap();
        // X and Y are stored mirrored (5 positions → 10 pairs), Z has 3 → 3.
        assert_eq!(g.graph().edge_count(), 6 + 10 + 10 + 3);
    }

    #[test]
    fn ride_weight_is_cumulative_distance_over_velocity() {
        let c = three_stop_line();
        let g = RoutingGraphBuilder::new(&c, settings()).build().unwrap();
        let s1 = g.stop_vertices(StopId(0)).unwrap();
        let s3 = g.stop_vertices(StopId(2)).unwrap();

        let ride = g
            .graph()
            .incident_edges(s1.wait_end)
            .find(|&e| g.graph().edge(e).to == s3.wait_start)
            .unwrap();
        assert!((g.graph().edge(ride).weight - 2.0).abs() < EPS);
        match *g.edge_kind(ride) {
            EdgeKind::Ride { span_count, duration, .. } => {
                assert_eq!(span_count, 2);
                assert!((duration - 2.0).abs() < EPS);
            }
            other => panic!("expected ride, got {other:?}"),
        }
    }

    #[test]
    fn linear_bus_return_edge_comes_from_mirrored_sequence() {
        // Linear bus over S1 S2 is stored as S1 S2 S1 and walked once forward:
        // rides S1→S2 (span 1), S1→S1 (span 2), S2→S1 (span 1).  No second,
        // reversed pass adds duplicates.
        let mut c = TransportCatalogue::new();
        add_stops(&mut c, &["S1", "S2"]);
        c.set_distance("S1", "S2", 1_000).unwrap();
        c.set_distance("S2", "S1", 1_500).unwrap();
        c.add_bus("B", &["S1", "S2"], false).unwrap();

        let g = RoutingGraphBuilder::new(&c, settings()).build().unwrap();
        let rides: Vec<_> = g
            .edge_kinds()
            .iter()
            .filter(|k| matches!(k, EdgeKind::Ride { .. }))
            .collect();
        assert_eq!(rides.len(), 3);

        let s1 = g.stop_vertices(StopId(0)).unwrap();
        let s2 = g.stop_vertices(StopId(1)).unwrap();
        let returns: Vec<_> = g
            .graph()
            .incident_edges(s2.wait_end)
            .filter(|&e| g.graph().edge(e).to == s1.wait_start)
            .collect();
        assert_eq!(returns.len(), 1, "exactly one S2→S1 ride");
        match *g.edge_kind(returns[0]) {
            EdgeKind::Ride { span_count, duration, .. } => {
                assert_eq!(span_count, 1);
                assert!((duration - 1.5).abs() < EPS);
            }
            other => panic!("expected ride, got {other:?}"),
        }

        let loop_ride = g
            .graph()
            .incident_edges(s1.wait_end)
            .find(|&e| g.graph().edge(e).to == s1.wait_start)
            .unwrap();
        assert!((g.graph().edge(loop_ride).weight - 2.5).abs() < EPS);
    }

    #[test]
    fn unserved_stop_gets_dangling_wait_edge() {
        let mut c = three_stop_line();
        let lonely = c.add_stop("Lonely", GeoPoint::new(56.0, 38.0)).unwrap();
        let g = RoutingGraphBuilder::new(&c, settings()).build().unwrap();
        let v = g.stop_vertices(lonely).unwrap();
        assert_eq!(g.graph().out_degree(v.wait_start), 1);
        assert_eq!(g.graph().out_degree(v.wait_end), 0);
    }

    #[test]
    fn empty_catalogue_gives_empty_graph() {
        let c = TransportCatalogue::new();
        let g = RoutingGraphBuilder::new(&c, settings()).build().unwrap();
        assert!(g.graph().is_empty());
        assert_eq!(g.graph().edge_count(), 0);
    }

    #[test]
    fn invalid_settings_rejected() {
        let c = three_stop_line();
        let bad = RoutingSettings::new(5.0, 0.0);
        let err = RoutingGraphBuilder::new(&c, bad).build().unwrap_err();
        assert!(matches!(err, RoutingError::Settings(_)));
    }

    #[test]
    fn routing_graph_debug_lists_stop_names() {
        let g = RoutingGraphBuilder::new(&three_stop_line(), settings()).build().unwrap();
        let dbg = format!("{g:?}");
        assert!(dbg.contains("RoutingGraph"));
        assert!(dbg.contains("S3"));
    }

    #[test]
    fn graph_outlives_catalogue() {
        let g = {
            let c = three_stop_line();
            RoutingGraphBuilder::new(&c, settings()).build().unwrap()
        };
        assert_eq!(g.stop_id("S2"), Some(StopId(1)));
        assert_eq!(g.stop_name(StopId(2)), "S3");
    }
}

// ── Route queries ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod queries {
    use super::*;

    #[test]
    fn ride_through_without_second_wait() {
        let r = TransportRouter::new(&three_stop_line(), settings()).unwrap();
        let it = r.route("S1", "S3").into_itinerary().unwrap();
        assert!((it.total_time - 7.0).abs() < EPS);
        assert_eq!(it.items.len(), 2);
        assert_eq!(
            it.items[0],
            ItineraryItem::Wait { stop_name: "S1".into(), time: 5.0 }
        );
        match &it.items[1] {
            ItineraryItem::Ride { bus_name, span_count, time } => {
                assert_eq!(bus_name, "A");
                assert_eq!(*span_count, 2);
                assert!((time - 2.0).abs() < EPS);
            }
            other => panic!("expected ride, got {other:?}"),
        }
    }

    #[test]
    fn roundtrip_bus_has_no_implicit_return() {
        // `A` is a round trip that never comes back to S1.
        let r = TransportRouter::new(&three_stop_line(), settings()).unwrap();
        assert_eq!(r.route("S3", "S1"), RouteResult::NotFound);
    }

    #[test]
    fn linear_bus_return_trip() {
        let mut c = TransportCatalogue::new();
        add_stops(&mut c, &["S1", "S2"]);
        c.set_distance("S1", "S2", 1_000).unwrap();
        c.set_distance("S2", "S1", 1_500).unwrap();
        c.add_bus("B", &["S1", "S2"], false).unwrap();
        let r = TransportRouter::new(&c, settings()).unwrap();

        let it = r.route("S2", "S1").into_itinerary().unwrap();
        assert!((it.total_time - 6.5).abs() < EPS);
        assert_eq!(it.ride_count(), 1);
        assert!(matches!(
            &it.items[1],
            ItineraryItem::Ride { span_count: 1, .. }
        ));
    }

    #[test]
    fn same_stop_is_empty_itinerary() {
        let r = TransportRouter::new(&city(), settings()).unwrap();
        let it = r.route("D", "D").into_itinerary().unwrap();
        assert_eq!(it.total_time, 0.0);
        assert!(it.is_empty());
    }

    #[test]
    fn unknown_stop_not_found() {
        let r = TransportRouter::new(&city(), settings()).unwrap();
        assert_eq!(r.route("A", "Nowhere"), RouteResult::NotFound);
        assert_eq!(r.route("Nowhere", "A"), RouteResult::NotFound);
        assert_eq!(r.route("Nowhere", "Nowhere"), RouteResult::NotFound);
    }

    #[test]
    fn disconnected_stops_not_found() {
        let mut c = three_stop_line();
        c.add_stop("Lonely", GeoPoint::new(56.0, 38.0)).unwrap();
        let r = TransportRouter::new(&c, settings()).unwrap();
        assert!(!r.route("S1", "Lonely").is_found());
        assert!(!r.route("Lonely", "S1").is_found());
        assert!(r.route("Lonely", "Lonely").is_found());
    }

    #[test]
    fn empty_catalogue_router() {
        let r = TransportRouter::new(&TransportCatalogue::new(), settings()).unwrap();
        assert_eq!(r.route("A", "B"), RouteResult::NotFound);
    }

    #[test]
    fn transfer_pays_wait_twice() {
        // A→E: wait A, X A→B (1.5), wait B, Y B→E (4.0 + 1.2).
        let r = TransportRouter::new(&city(), settings()).unwrap();
        let it = r.route("A", "E").into_itinerary().unwrap();
        assert!((it.total_time - (5.0 + 1.5 + 5.0 + 5.2)).abs() < EPS);

        let kinds: Vec<(&str, Option<u32>)> = it
            .items
            .iter()
            .map(|i| match i {
                ItineraryItem::Wait { stop_name, .. } => (stop_name.as_str(), None),
                ItineraryItem::Ride { bus_name, span_count, .. } => {
                    (bus_name.as_str(), Some(*span_count))
                }
            })
            .collect();
        assert_eq!(kinds, vec![("A", None), ("X", Some(1)), ("B", None), ("Y", Some(2))]);
    }

    #[test]
    fn staying_on_board_beats_getting_off() {
        // C→A on X's return leg: one wait, span 2, no intermediate wait at B.
        let r = TransportRouter::new(&city(), settings()).unwrap();
        let it = r.route("C", "A").into_itinerary().unwrap();
        assert_eq!(it.ride_count(), 1);
        assert!((it.total_time - (5.0 + 2.7 + 1.5)).abs() < EPS);
    }

    #[test]
    fn settings_are_kept() {
        let r = TransportRouter::new(&city(), settings()).unwrap();
        assert_eq!(*r.settings(), settings());
    }

    #[test]
    fn router_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransportRouter>();
    }
}

// ── Whole-network properties ──────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn item_times_sum_to_total() {
        let c = city();
        let r = TransportRouter::new(&c, settings()).unwrap();
        for from in names(&c) {
            for to in names(&c) {
                if let RouteResult::Found(it) = r.route(&from, &to) {
                    let sum: f64 = it.items.iter().map(ItineraryItem::time).sum();
                    assert!((sum - it.total_time).abs() < EPS, "{from}→{to}");
                }
            }
        }
    }

    #[test]
    fn itineraries_alternate_wait_and_ride() {
        let c = city();
        let r = TransportRouter::new(&c, settings()).unwrap();
        for from in names(&c) {
            for to in names(&c) {
                let Some(it) = r.route(&from, &to).into_itinerary() else { continue };
                assert_eq!(it.items.len() % 2, 0, "{from}→{to}");
                for pair in it.items.chunks(2) {
                    assert!(matches!(pair[0], ItineraryItem::Wait { .. }));
                    assert!(matches!(pair[1], ItineraryItem::Ride { .. }));
                }
                if let Some(ItineraryItem::Wait { stop_name, .. }) = it.items.first() {
                    assert_eq!(*stop_name, from);
                }
            }
        }
    }

    #[test]
    fn unserved_stop_changes_no_route() {
        let before = city();
        let mut after = city();
        after.add_stop("Lonely", GeoPoint::new(56.0, 38.0)).unwrap();

        let r1 = TransportRouter::new(&before, settings()).unwrap();
        let r2 = TransportRouter::new(&after, settings()).unwrap();
        for from in names(&before) {
            for to in names(&before) {
                assert_eq!(r1.route(&from, &to), r2.route(&from, &to), "{from}→{to}");
            }
        }
    }

    #[test]
    fn all_pairs_reachable_in_connected_city() {
        let c = city();
        let r = TransportRouter::new(&c, settings()).unwrap();
        for from in names(&c) {
            for to in names(&c) {
                assert!(r.route(&from, &to).is_found(), "{from}→{to}");
            }
        }
    }
}

// ── Serialization ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "serde"))]
mod serialization {
    use serde_json::json;

    use crate::{Itinerary, ItineraryItem};

    #[test]
    fn items_use_protocol_shape() {
        let it = Itinerary {
            total_time: 7.5,
            items: vec![
                ItineraryItem::Wait { stop_name: "S1".into(), time: 5.0 },
                ItineraryItem::Ride { bus_name: "A".into(), span_count: 2, time: 2.5 },
            ],
        };
        assert_eq!(
            serde_json::to_value(&it).unwrap(),
            json!({
                "total_time": 7.5,
                "items": [
                    {"type": "Wait", "stop_name": "S1", "time": 5.0},
                    {"type": "Bus", "bus": "A", "span_count": 2, "time": 2.5},
                ]
            })
        );
    }
}
