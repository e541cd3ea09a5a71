use std::time::Instant;

use fxhash::{FxHashMap, FxHashSet};
use regex::Regex;

fn main() {
    let input = std::fs::read_to_string("input.txt").expect("no input.txt in working directory");

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });
}

struct Number {
    value: u64,
    row: usize,
    cols: (usize, usize),
}

fn find_numbers(grid: &[&str]) -> Vec<Number> {
    let re = Regex::new(r"\d+").unwrap();

    grid.iter()
        .enumerate()
        .flat_map(|(row, line)| {
            re.find_iter(line).map(move |m| Number {
                value: m.as_str().parse::<u64>().unwrap(),
                row,
                cols: (m.start(), m.end()),
            })
        })
        .collect()
}

/// All cells in the one-wide band around a number's span, clipped to the grid.
fn band_around(grid: &[&str], num: &Number) -> Vec<(usize, usize)> {
    let h = grid.len();
    let w = grid[0].len();

    let top = num.row.saturating_sub(1);
    let bottom = (num.row + 1).min(h - 1);
    let left = num.cols.0.saturating_sub(1);
    let right = num.cols.1.min(w - 1);

    (top..=bottom)
        .flat_map(|y| (left..=right).map(move |x| (y, x)))
        .filter(|&(y, x)| y != num.row || x < num.cols.0 || x >= num.cols.1)
        .collect()
}

fn solve(input: &str) -> u64 {
    let grid = input.trim().lines().collect::<Vec<_>>();

    find_numbers(&grid)
        .iter()
        .filter(|num| {
            band_around(&grid, num).into_iter().any(|(y, x)| {
                let c = grid[y].as_bytes()[x] as char;
                c != '.' && !c.is_ascii_digit()
            })
        })
        .map(|num| num.value)
        .sum()
}

fn bonus(input: &str) -> u64 {
    let grid = input.trim().lines().collect::<Vec<_>>();

    let mut star_neighbors: FxHashMap<(usize, usize), Vec<u64>> = FxHashMap::default();

    for num in find_numbers(&grid) {
        // A number can touch the same star in several cells, count it once.
        let stars = band_around(&grid, &num)
            .into_iter()
            .filter(|&(y, x)| grid[y].as_bytes()[x] == b'*')
            .collect::<FxHashSet<_>>();

        for star in stars {
            star_neighbors.entry(star).or_default().push(num.value);
        }
    }

    star_neighbors
        .values()
        .filter(|nums| nums.len() == 2)
        .map(|nums| nums[0] * nums[1])
        .sum()
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
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
"
    .trim();

    assert_eq!(solve(example_input), 4361);
    assert_eq!(bonus(example_input), 467835);
}
