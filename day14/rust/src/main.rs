use std::time::Instant;

use fxhash::FxHashMap;

fn main() {
    let input = std::fs::read_to_string("input.txt").expect("no input.txt in working directory");

    time(|| {
        // <1ms
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±100ms
        println!("Bonus: {}", bonus(&input));
    });
}

type Grid = Vec<Vec<char>>;

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.chars().collect::<Vec<_>>())
        .collect()
}

/// Roll every round rock in the row as far left as it goes. Cube rocks stay
/// put and block everything behind them.
fn slide_row_west(row: &mut [char]) {
    let mut free = 0;
    for i in 0..row.len() {
        match row[i] {
            '#' => free = i + 1,
            'O' => {
                row[i] = '.';
                row[free] = 'O';
                free += 1;
            }
            _ => {}
        }
    }
}

fn slide_west(grid: &mut Grid) {
    for row in grid.iter_mut() {
        slide_row_west(row);
    }
}

fn transpose(grid: &Grid) -> Grid {
    (0..grid[0].len())
        .map(|x| grid.iter().map(|row| row[x]).collect::<Vec<_>>())
        .collect()
}

fn flip(grid: &mut Grid) {
    for row in grid.iter_mut() {
        row.reverse();
    }
}

// One west-sliding routine does all four directions, by transposing and/or
// flipping the grid around it.

fn tilt_north(grid: &mut Grid) {
    *grid = transpose(grid);
    slide_west(grid);
    *grid = transpose(grid);
}

fn tilt_south(grid: &mut Grid) {
    *grid = transpose(grid);
    flip(grid);
    slide_west(grid);
    flip(grid);
    *grid = transpose(grid);
}

fn tilt_east(grid: &mut Grid) {
    flip(grid);
    slide_west(grid);
    flip(grid);
}

fn spin_cycle(grid: &mut Grid) {
    tilt_north(grid);
    slide_west(grid);
    tilt_south(grid);
    tilt_east(grid);
}

fn north_load(grid: &Grid) -> usize {
    let h = grid.len();

    grid.iter()
        .enumerate()
        .map(|(y, row)| (h - y) * row.iter().filter(|&&c| c == 'O').count())
        .sum()
}

fn solve(input: &str) -> usize {
    let mut grid = parse(input);

    tilt_north(&mut grid);

    north_load(&grid)
}

fn bonus(input: &str) -> usize {
    let mut grid = parse(input);

    let n = 1000000000;
    let mut seen: FxHashMap<Grid, usize> = FxHashMap::default();

    for i in 1..=n {
        spin_cycle(&mut grid);

        if let Some(&first) = seen.get(&grid) {
            // back at a state from cycle `first`, jump ahead by whole periods
            let remaining = (n - i) % (i - first);
            for _ in 0..remaining {
                spin_cycle(&mut grid);
            }
            break;
        }

        seen.insert(grid.clone(), i);
    }

    north_load(&grid)
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
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
"
    .trim();

    assert_eq!(solve(example_input), 136);
    assert_eq!(bonus(example_input), 64);
}
