use slidecargo::{classify, goal_pos, Pos, Proximity};

#[test]
fn goal_positions_are_row_major() {
    assert_eq!(goal_pos(1, 3), Some(Pos::new(0, 0)));
    assert_eq!(goal_pos(5, 3), Some(Pos::new(1, 1)));
    assert_eq!(goal_pos(8, 3), Some(Pos::new(2, 1)));
    assert_eq!(goal_pos(1, 4), Some(Pos::new(0, 0)));
    assert_eq!(goal_pos(15, 4), Some(Pos::new(3, 2)));
    assert_eq!(goal_pos(24, 5), Some(Pos::new(4, 3)));
}

#[test]
fn out_of_range_labels_have_no_goal() {
    assert_eq!(goal_pos(0, 3), None);
    assert_eq!(goal_pos(9, 3), None, "9 is not a tile label on a 3x3 board");
    assert_eq!(goal_pos(16, 4), None);
    assert_eq!(goal_pos(25, 5), None);
}

#[test]
fn classify_covers_all_distances_for_label_five() {
    // Label 5's goal on a 3x3 board is (1,1).
    assert_eq!(classify(Some(5), Pos::new(1, 1), 3), Proximity::Correct);
    assert_eq!(classify(Some(5), Pos::new(0, 1), 3), Proximity::Close);
    assert_eq!(classify(Some(5), Pos::new(2, 2), 3), Proximity::Far);
}

#[test]
fn empty_slot_classifies_empty_everywhere() {
    for size in [3u8, 4, 5] {
        for row in 0..size {
            for col in 0..size {
                assert_eq!(classify(None, Pos::new(row, col), size), Proximity::Empty);
            }
        }
    }
}

#[test]
fn out_of_range_labels_classify_far() {
    assert_eq!(classify(Some(0), Pos::new(0, 0), 3), Proximity::Far);
    assert_eq!(classify(Some(9), Pos::new(2, 2), 3), Proximity::Far);
    assert_eq!(classify(Some(200), Pos::new(1, 1), 5), Proximity::Far);
}

#[test]
fn close_means_manhattan_distance_exactly_one() {
    // Label 1's goal is (0,0); (1,1) is distance 2, not close.
    assert_eq!(classify(Some(1), Pos::new(0, 1), 3), Proximity::Close);
    assert_eq!(classify(Some(1), Pos::new(1, 0), 3), Proximity::Close);
    assert_eq!(classify(Some(1), Pos::new(1, 1), 3), Proximity::Far);
}
