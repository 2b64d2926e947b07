//! Expansion of run-number expressions such as `1,10-12,7`.

use tracing::info;

/// Run numbers are scoped to an instrument. Zero never names a real run.
pub type RunNumber = u64;

/// Widest range a single token may expand to.
pub const MAX_RANGE_SPAN: RunNumber = 100_000;

/// Expands a run expression into run numbers, keeping the order tokens were given in.
///
/// A plain integer is returned as is. Otherwise the expression is split on commas and every
/// token is either a single run or a `low-high` range, expanded ascending whichever bound comes
/// first. Malformed numbers count as `0` and are dropped, as is any range whose lower bound is
/// `0` or that spans [`MAX_RANGE_SPAN`] runs or more. A dash always separates a range, so `-5`
/// is not a negative run.
pub fn parse_runs(expression: &str) -> Vec<RunNumber> {
    if let Ok(run) = expression.trim().parse::<RunNumber>() {
        return vec![run];
    }

    let mut runs = Vec::new();
    for token in expression.split(',') {
        match token.split_once('-') {
            Some((first, second)) => {
                let mut bounds = [run_number(first), run_number(second)];
                bounds.sort_unstable();
                let [low, high] = bounds;
                if low == 0 {
                    continue;
                }
                if high - low >= MAX_RANGE_SPAN {
                    info!("Skipping range `{token}`, it spans more than {MAX_RANGE_SPAN} runs");
                    continue;
                }
                runs.extend(low..=high);
            }
            None => match run_number(token) {
                0 => {}
                run => runs.push(run),
            },
        }
    }
    runs
}

fn run_number(token: &str) -> RunNumber {
    token.trim().parse().unwrap_or_else(|_| {
        info!("Could not convert `{token}` to a run number");
        0
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_runs, MAX_RANGE_SPAN};

    #[test]
    fn given_single_number_when_parse_runs_then_give_that_run() {
        assert_eq!(parse_runs("123"), vec![123]);
        assert_eq!(parse_runs(" 42 "), vec![42]);
    }

    #[test]
    fn given_comma_list_when_parse_runs_then_keep_given_order() {
        assert_eq!(parse_runs("1,3,5"), vec![1, 3, 5]);
        assert_eq!(parse_runs("5,3,1"), vec![5, 3, 1]);
    }

    #[test]
    fn given_reversed_range_when_parse_runs_then_expand_ascending() {
        assert_eq!(parse_runs("5-3"), vec![3, 4, 5]);
        assert_eq!(parse_runs("3-5"), vec![3, 4, 5]);
        assert_eq!(parse_runs("7-7"), vec![7]);
    }

    #[test]
    fn given_zero_lower_bound_when_parse_runs_then_drop_whole_range() {
        assert!(parse_runs("0-5").is_empty());
        assert_eq!(parse_runs("2,5-0,9"), vec![2, 9]);
    }

    #[test]
    fn given_mixed_tokens_when_parse_runs_then_concatenate_in_token_order() {
        assert_eq!(parse_runs("1,10-12,7"), vec![1, 10, 11, 12, 7]);
    }

    #[test]
    fn given_malformed_tokens_when_parse_runs_then_drop_them() {
        assert_eq!(parse_runs("1,abc,3"), vec![1, 3]);
        assert_eq!(parse_runs("0,4"), vec![4]);
        assert!(parse_runs("x-9").is_empty());
        assert!(parse_runs("").is_empty());
    }

    #[test]
    fn given_leading_dash_when_parse_runs_then_treat_it_as_broken_range() {
        assert!(parse_runs("-5").is_empty());
        assert_eq!(parse_runs("4,-5"), vec![4]);
    }

    #[test]
    fn given_more_than_one_dash_when_parse_runs_then_split_on_first_dash_only() {
        assert!(parse_runs("1-2-3").is_empty());
    }

    #[test]
    fn given_huge_range_when_parse_runs_then_skip_it_and_keep_the_rest() {
        assert!(parse_runs("1-18446744073709551615").is_empty());
        assert_eq!(parse_runs("5,1-1000000000,6"), vec![5, 6]);

        let widest = parse_runs(&format!("1-{MAX_RANGE_SPAN}"));
        assert_eq!(widest.len() as u64, MAX_RANGE_SPAN);
        assert!(parse_runs(&format!("1-{}", MAX_RANGE_SPAN + 1)).is_empty());
    }

    #[test]
    fn given_joined_positive_runs_when_parse_runs_then_reproduce_them() {
        let lists: [&[u64]; 4] = [&[1], &[3, 1, 2], &[100, 7, 7, 55], &[48_000, 47_999, 1]];
        for list in lists {
            let joined = list.iter().map(u64::to_string).collect::<Vec<_>>().join(",");
            assert_eq!(parse_runs(&joined), list.to_vec());
        }
    }
}
