use twodtree::{Point, TwoDTree};

fn to_points(coords: &[(i8, i8)]) -> Vec<Point> {
    coords
        .iter()
        .map(|&(x, y)| Point::new(i32::from(x), i32::from(y)))
        .collect()
}

fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by_key(|p| (p.x, p.y));
    points
}

#[test]
fn example_scenario() {
    let tree: TwoDTree = to_points(&[(2, 3), (4, 2), (4, 5), (5, 4), (9, 6), (7, 8)]).into();

    assert!(tree.search(&Point::new(5, 4)));
    assert!(!tree.search(&Point::new(5, 5)));
    assert_eq!(
        sorted(tree.range_search(Point::new(3, 1), Point::new(8, 5))),
        to_points(&[(4, 2), (4, 5), (5, 4)])
    );
}

#[test]
fn empty_tree_answers_nothing() {
    let tree = TwoDTree::default();

    assert!(!tree.search(&Point::new(0, 0)));
    assert!(tree.range_search(Point::new(-5, 5), Point::new(5, -5)).is_empty());
}

#[test]
fn parsed_points_can_be_queried() {
    let tree: TwoDTree = "1,2\n(3, 4)\n  5 6  "
        .lines()
        .map(str::parse)
        .collect::<Result<Vec<Point>, _>>()
        .unwrap()
        .into();

    assert_eq!(tree.len(), 3);
    assert!(tree.search(&"(3,4)".parse().unwrap()));
    assert!("3;4".parse::<Point>().is_err());
}

#[quickcheck]
fn contains(xs: Vec<(i8, i8)>) -> bool {
    let points = to_points(&xs);
    let tree: TwoDTree = points.clone().into();

    points.iter().all(|p| tree.search(p))
}

#[quickcheck]
fn contains_not(xs: Vec<(i8, i8)>, nots: Vec<(i8, i8)>) -> bool {
    let points = to_points(&xs);
    let tree: TwoDTree = points.clone().into();

    to_points(&nots)
        .iter()
        .filter(|q| !points.contains(q))
        .all(|q| !tree.search(q))
}

#[quickcheck]
fn range_search_is_sound_and_complete(xs: Vec<(i8, i8)>, c1: (i8, i8), c2: (i8, i8)) -> bool {
    let points = to_points(&xs);
    let tree: TwoDTree = points.clone().into();
    let corners = to_points(&[c1, c2]);
    let (p1, p2) = (corners[0], corners[1]);

    let (lo_x, hi_x) = (p1.x.min(p2.x), p1.x.max(p2.x));
    let (lo_y, hi_y) = (p1.y.min(p2.y), p1.y.max(p2.y));
    let expected: Vec<Point> = points
        .into_iter()
        .filter(|p| lo_x <= p.x && p.x <= hi_x && lo_y <= p.y && p.y <= hi_y)
        .collect();

    sorted(tree.range_search(p1, p2)) == sorted(expected)
}
