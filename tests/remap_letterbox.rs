use regionbox::{to_bounding_boxes, Candidate};

fn candidate(cx: f32, cy: f32, w: f32, h: f32, score: f32, class_id: usize) -> Candidate {
    Candidate {
        cx,
        cy,
        w,
        h,
        score,
        class_id,
    }
}

#[test]
fn identity_remap_multiplies_by_net_size() {
    let survivors = [candidate(0.5, 0.25, 0.2, 0.1, 0.8, 0)];
    let boxes = to_bounding_boxes(&survivors, (416, 416), Some((416, 416)), None);
    assert_eq!(boxes.len(), 1);

    let b = &boxes[0];
    assert!((b.x_top_left - (0.5 - 0.1) * 416.0).abs() < 1e-4);
    assert!((b.y_top_left - (0.25 - 0.05) * 416.0).abs() < 1e-4);
    assert!((b.width - 0.2 * 416.0).abs() < 1e-4);
    assert!((b.height - 0.1 * 416.0).abs() < 1e-4);
    assert!((b.confidence - 80.0).abs() < 1e-4);
}

#[test]
fn missing_image_size_keeps_network_pixels() {
    let survivors = [candidate(0.5, 0.5, 0.5, 0.5, 1.0, 0)];
    let boxes = to_bounding_boxes(&survivors, (608, 416), None, None);

    let b = &boxes[0];
    assert!((b.x_top_left - 152.0).abs() < 1e-4);
    assert!((b.y_top_left - 104.0).abs() < 1e-4);
    assert!((b.width - 304.0).abs() < 1e-4);
    assert!((b.height - 208.0).abs() < 1e-4);
}

#[test]
fn letterboxed_tall_image_recovers_original_coordinates() {
    // A 300x600 image letterboxed into 416x416 binds on height:
    // scale = 416/600, pad = (104, 0).
    let survivors = [candidate(0.5, 0.5, 0.1, 0.1, 0.9, 0)];
    let boxes = to_bounding_boxes(&survivors, (416, 416), Some((300, 600)), None);

    let b = &boxes[0];
    let center_x = b.x_top_left + b.width / 2.0;
    let center_y = b.y_top_left + b.height / 2.0;
    assert!((center_x - 150.0).abs() < 0.5);
    assert!((center_y - 300.0).abs() < 0.5);

    let scale = 416.0 / 600.0;
    assert!((b.width - 41.6 / scale).abs() < 0.1);
    assert!((b.height - 41.6 / scale).abs() < 0.1);
}

#[test]
fn labels_resolve_through_the_map() {
    let survivors = [
        candidate(0.5, 0.5, 0.1, 0.1, 0.9, 1),
        candidate(0.2, 0.2, 0.1, 0.1, 0.8, 0),
    ];
    let labels = ["cat", "dog"];
    let boxes = to_bounding_boxes(&survivors, (416, 416), None, Some(&labels));
    assert_eq!(boxes[0].label.as_deref(), Some("dog"));
    assert_eq!(boxes[0].class_id, 1);
    assert_eq!(boxes[1].label.as_deref(), Some("cat"));
}

#[test]
fn missing_label_map_leaves_numeric_class_only() {
    let survivors = [candidate(0.5, 0.5, 0.1, 0.1, 0.9, 7)];
    let boxes = to_bounding_boxes(&survivors, (416, 416), None, None);
    assert_eq!(boxes[0].class_id, 7);
    assert_eq!(boxes[0].label, None);
}

#[test]
fn empty_survivor_list_maps_to_empty_output() {
    let boxes = to_bounding_boxes(&[], (416, 416), Some((300, 600)), None);
    assert!(boxes.is_empty());
}
