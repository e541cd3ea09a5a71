use std::time::Instant;

use fxhash::{FxHashMap, FxHashSet};

fn main() {
    let input = std::fs::read_to_string("input.txt").expect("no input.txt in working directory");

    time(|| {
        // ±500ms
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±2s
        println!("Bonus: {}", bonus(&input));
    });
}

type Grid = Vec<Vec<char>>;
type Pos = (i32, i32);

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.chars().collect::<Vec<_>>())
        .collect()
}

fn get(grid: &Grid, (x, y): Pos) -> Option<char> {
    (x >= 0 && y >= 0)
        .then(|| grid.get(y as usize).and_then(|row| row.get(x as usize)))
        .flatten()
        .copied()
}

/// The single path tile in the top (or bottom) row.
fn path_tile_in_row(grid: &Grid, y: usize) -> Pos {
    let x = grid[y].iter().position(|&c| c == '.').unwrap();
    (x as i32, y as i32)
}

/// Where you may step to from `(x, y)`: down a slope only, or any of the
/// four walkable neighbours from a plain path tile.
fn moves_from(grid: &Grid, (x, y): Pos) -> Vec<Pos> {
    let steps = match get(grid, (x, y)) {
        Some('>') => vec![(x + 1, y)],
        Some('<') => vec![(x - 1, y)],
        Some('v') => vec![(x, y + 1)],
        Some('^') => vec![(x, y - 1)],
        _ => vec![(x + 1, y), (x, y + 1), (x - 1, y), (x, y - 1)],
    };

    steps
        .into_iter()
        .filter(|&n| matches!(get(grid, n), Some(c) if c != '#'))
        .collect()
}

fn walkable_neighbors(grid: &Grid, (x, y): Pos) -> Vec<Pos> {
    [(x + 1, y), (x, y + 1), (x - 1, y), (x, y - 1)]
        .into_iter()
        .filter(|&n| matches!(get(grid, n), Some(c) if c != '#'))
        .collect()
}

fn longest_walk(grid: &Grid, end: Pos, visited: &mut FxHashSet<Pos>, pos: Pos) -> Option<usize> {
    if pos == end {
        return Some(0);
    }

    visited.insert(pos);

    let best = moves_from(grid, pos)
        .into_iter()
        .filter(|n| !visited.contains(n))
        .collect::<Vec<_>>()
        .into_iter()
        .filter_map(|n| longest_walk(grid, end, visited, n))
        .max()
        .map(|n| n + 1);

    visited.remove(&pos);

    best
}

fn solve(input: &str) -> usize {
    let grid = parse(input);

    let start = path_tile_in_row(&grid, 0);
    let end = path_tile_in_row(&grid, grid.len() - 1);

    longest_walk(&grid, end, &mut FxHashSet::default(), start).unwrap()
}

/// Ignoring slopes, almost every tile sits in a corridor with exactly two
/// neighbours. Contract the map down to its junction tiles (plus start and
/// end) with corridor lengths as edge weights, and search that graph instead.
fn junction_graph(grid: &Grid, start: Pos, end: Pos) -> (Vec<Vec<(usize, usize)>>, usize, usize) {
    let mut nodes = vec![start, end];
    for (y, row) in grid.iter().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            let pos = (x as i32, y as i32);
            if c != '#' && walkable_neighbors(grid, pos).len() >= 3 {
                nodes.push(pos);
            }
        }
    }

    let index: FxHashMap<Pos, usize> = nodes.iter().enumerate().map(|(i, &p)| (p, i)).collect();

    let mut edges = vec![vec![]; nodes.len()];
    for (i, &node) in nodes.iter().enumerate() {
        for first_step in walkable_neighbors(grid, node) {
            let mut prev = node;
            let mut cur = first_step;
            let mut dist = 1;

            // follow the corridor until it hits the next junction
            while !index.contains_key(&cur) {
                let Some(&next) = walkable_neighbors(grid, cur).iter().find(|&&n| n != prev)
                else {
                    break;
                };
                prev = cur;
                cur = next;
                dist += 1;
            }

            if let Some(&j) = index.get(&cur) {
                edges[i].push((j, dist));
            }
        }
    }

    (edges, index[&start], index[&end])
}

fn longest_path(
    edges: &Vec<Vec<(usize, usize)>>,
    end: usize,
    seen: &mut Vec<bool>,
    node: usize,
) -> Option<usize> {
    if node == end {
        return Some(0);
    }

    seen[node] = true;

    let best = edges[node]
        .iter()
        .filter(|&&(next, _)| !seen[next])
        .copied()
        .collect::<Vec<_>>()
        .into_iter()
        .filter_map(|(next, dist)| longest_path(edges, end, seen, next).map(|n| n + dist))
        .max();

    seen[node] = false;

    best
}

fn bonus(input: &str) -> usize {
    let grid = parse(input);

    let start = path_tile_in_row(&grid, 0);
    let end = path_tile_in_row(&grid, grid.len() - 1);

    let (edges, start, end) = junction_graph(&grid, start, end);

    longest_path(&edges, end, &mut vec![false; edges.len()], start).unwrap()
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
#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.>.#.>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#
"
    .trim();

    assert_eq!(solve(example_input), 94);
    assert_eq!(bonus(example_input), 154);
}
