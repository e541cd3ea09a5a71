use std::time::Instant;

fn main() {
    let input = std::fs::read_to_string("input.txt").expect("no input.txt in working directory");

    time(|| {
        // <1ms
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±1ms
        println!("Bonus: {}", bonus(&input));
    });
}

type Pattern = Vec<Vec<char>>;

fn parse(input: &str) -> Vec<Pattern> {
    input
        .trim()
        .split("\n\n")
        .map(|pattern| {
            pattern
                .lines()
                .map(|line| line.chars().collect::<Vec<_>>())
                .collect::<Vec<_>>()
        })
        .collect()
}

fn transpose(pattern: &Pattern) -> Pattern {
    (0..pattern[0].len())
        .map(|x| pattern.iter().map(|row| row[x]).collect::<Vec<_>>())
        .collect()
}

/// A mirror between rows `r-1` and `r` is valid if every pair of rows at
/// equal distance from it disagrees in exactly `smudges` cells in total.
/// The shorter side governs, rows reflected off the pattern don't count.
fn mirror_line(pattern: &Pattern, smudges: usize) -> Option<usize> {
    (1..pattern.len()).find(|&r| {
        let mismatches = (0..r.min(pattern.len() - r))
            .map(|k| {
                pattern[r - 1 - k]
                    .iter()
                    .zip(&pattern[r + k])
                    .filter(|(a, b)| a != b)
                    .count()
            })
            .sum::<usize>();

        mismatches == smudges
    })
}

fn score(pattern: &Pattern, smudges: usize) -> usize {
    if let Some(row) = mirror_line(pattern, smudges) {
        return 100 * row;
    }
    if let Some(col) = mirror_line(&transpose(pattern), smudges) {
        return col;
    }

    panic!("pattern has no reflection line");
}

fn solve(input: &str) -> usize {
    parse(input).iter().map(|pattern| score(pattern, 0)).sum()
}

fn bonus(input: &str) -> usize {
    // exactly one smudged cell; a clean mirror (0 mismatches) no longer counts,
    // so the line found here always differs from the first part's
    parse(input).iter().map(|pattern| score(pattern, 1)).sum()
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
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
"
    .trim();

    assert_eq!(solve(example_input), 405);
    assert_eq!(bonus(example_input), 400);
}
