use std::time::Instant;

use cached::proc_macro::cached;
use rayon::prelude::*;

fn main() {
    let input = std::fs::read_to_string("input.txt").expect("no input.txt in working directory");

    time(|| {
        // ±5ms
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±50ms
        println!("Bonus: {}", bonus(&input));
    });
}

fn parse_line(line: &str) -> (String, Vec<usize>) {
    let (record, groups) = line.split_once(" ").unwrap();

    (
        record.to_string(),
        groups
            .split(",")
            .map(|n| n.parse::<usize>().unwrap())
            .collect::<Vec<_>>(),
    )
}

fn solve(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .map(|line| {
            let (record, groups) = parse_line(line);
            arrangements(record, groups)
        })
        .sum()
}

fn bonus(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|line| {
            let (record, groups) = parse_line(line);

            let record = [record.as_str(); 5].join("?");
            let groups = groups.repeat(5);

            arrangements(record, groups)
        })
        .sum()
}

/// Number of ways to assign the `?`s so the runs of `#` are exactly `groups`.
/// Either the first spring is (or becomes) operational and we move on, or it
/// starts a damaged run that has to consume the whole first group.
#[cached]
fn arrangements(record: String, groups: Vec<usize>) -> u64 {
    let Some(c) = record.chars().next() else {
        return groups.is_empty() as u64;
    };

    let mut total = 0;

    if c == '.' || c == '?' {
        total += arrangements(record[1..].to_string(), groups.clone());
    }

    if (c == '#' || c == '?') && !groups.is_empty() {
        let n = groups[0];
        let fits = record.len() >= n && record[..n].chars().all(|c| c != '.');

        if fits && record.len() == n {
            total += (groups.len() == 1) as u64;
        } else if fits && record[n..].chars().next() != Some('#') {
            // the run must be terminated by an operational spring
            total += arrangements(record[(n + 1)..].to_string(), groups[1..].to_vec());
        }
    }

    total
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
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
"
    .trim();

    assert_eq!(solve(example_input), 21);
    assert_eq!(bonus(example_input), 525152);
}
