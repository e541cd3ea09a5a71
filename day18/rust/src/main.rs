use std::time::Instant;

use fxhash::FxHashSet;

fn main() {
    let input = std::fs::read_to_string("input.txt").expect("no input.txt in working directory");

    time(|| {
        // ±50ms
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // <100µs
        println!("Bonus: {}", bonus(&input));
    });
}

type Pos = (i64, i64);

fn direction(c: char) -> Pos {
    match c {
        'U' => (0, -1),
        'D' => (0, 1),
        'L' => (-1, 0),
        'R' => (1, 0),
        _ => unreachable!(),
    }
}

fn parse(input: &str) -> Vec<(Pos, i64)> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (dir, rest) = line.split_once(" ").unwrap();
            let (steps, _) = rest.split_once(" ").unwrap();

            (
                direction(dir.chars().next().unwrap()),
                steps.parse::<i64>().unwrap(),
            )
        })
        .collect()
}

/// The real instruction hides in the hex blob: five hex digits of distance,
/// then one digit encoding the direction.
fn parse_hex(input: &str) -> Vec<(Pos, i64)> {
    input
        .trim()
        .lines()
        .map(|line| {
            let color = &line.split_once(" (#").unwrap().1[0..6];
            let steps = i64::from_str_radix(&color[0..5], 16).unwrap();
            let dir = match &color[5..6] {
                "0" => direction('R'),
                "1" => direction('D'),
                "2" => direction('L'),
                "3" => direction('U'),
                _ => unreachable!(),
            };

            (dir, steps)
        })
        .collect()
}

/// Flood out from `start` across undug tiles. `None` means the fill escaped
/// the trench's bounding box, so `start` was not enclosed.
fn enclosed_region(
    trench: &FxHashSet<Pos>,
    (min_x, min_y): Pos,
    (max_x, max_y): Pos,
    start: Pos,
) -> Option<FxHashSet<Pos>> {
    let mut region = FxHashSet::default();
    let mut todo = vec![start];

    while let Some((x, y)) = todo.pop() {
        if x < min_x || x > max_x || y < min_y || y > max_y {
            return None;
        }
        if trench.contains(&(x, y)) || !region.insert((x, y)) {
            continue;
        }
        todo.extend([(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]);
    }

    Some(region)
}

fn solve(input: &str) -> usize {
    let instructions = parse(input);

    // dig the trench one tile at a time
    let mut trench = FxHashSet::default();
    let (mut x, mut y) = (0, 0);
    trench.insert((x, y));
    for &((dx, dy), steps) in &instructions {
        for _ in 0..steps {
            x += dx;
            y += dy;
            trench.insert((x, y));
        }
    }

    let min = (
        trench.iter().map(|p| p.0).min().unwrap(),
        trench.iter().map(|p| p.1).min().unwrap(),
    );
    let max = (
        trench.iter().map(|p| p.0).max().unwrap(),
        trench.iter().map(|p| p.1).max().unwrap(),
    );

    // probe for an enclosed tile, then everything it floods to is interior
    for y in min.1..=max.1 {
        for x in min.0..=max.0 {
            if trench.contains(&(x, y)) {
                continue;
            }
            if let Some(region) = enclosed_region(&trench, min, max, (x, y)) {
                return trench.len() + region.len();
            }
        }
    }

    panic!("the trench encloses nothing");
}

fn bonus(input: &str) -> i64 {
    let instructions = parse_hex(input);

    // distances are far too large to rasterize; shoelace over the corner
    // points, then add the boundary tiles the lattice area misses
    let mut corners = vec![(0, 0)];
    let mut perimeter = 0;
    let (mut x, mut y) = (0, 0);
    for &((dx, dy), steps) in &instructions {
        x += dx * steps;
        y += dy * steps;
        perimeter += steps;
        corners.push((x, y));
    }

    let twice_area = corners
        .windows(2)
        .map(|pair| pair[0].0 * pair[1].1 - pair[1].0 * pair[0].1)
        .sum::<i64>()
        .abs();

    twice_area / 2 + perimeter / 2 + 1
}

fn time<F>(mut f: F)
where
    F: FnMut(),
{
    let t0 = Instant::now();
    f();
    println!("  took {:?}", t0.elapsed());
}

#[test]
fn test() {
    let example_input = "
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
"
    .trim();

    assert_eq!(solve(example_input), 62);
    assert_eq!(bonus(example_input), 952408144115);
}
