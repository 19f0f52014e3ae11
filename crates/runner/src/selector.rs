use followgraph_core::Problem;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("registration number {0:?} is shorter than two characters")]
    TooShort(String),

    #[error("last two characters {suffix:?} of registration number {reg_no:?} are not a base-10 integer")]
    NotNumeric { reg_no: String, suffix: String },
}

/// Pick the problem for a registration number.
///
/// The last two characters are parsed as a base-10 integer: odd selects
/// mutual followers, even selects nth-level followers. `"05"` reads as 5.
pub fn select_problem(reg_no: &str) -> Result<Problem, SelectorError> {
    let chars: Vec<char> = reg_no.chars().collect();
    if chars.len() < 2 {
        return Err(SelectorError::TooShort(reg_no.to_string()));
    }

    let suffix: String = chars[chars.len() - 2..].iter().collect();
    let value: i32 = suffix.parse().map_err(|_| SelectorError::NotNumeric {
        reg_no: reg_no.to_string(),
        suffix: suffix.clone(),
    })?;

    if value % 2 != 0 {
        Ok(Problem::MutualFollowers)
    } else {
        Ok(Problem::NthLevelFollowers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_suffix_selects_mutual_followers() {
        assert_eq!(select_problem("REG12347"), Ok(Problem::MutualFollowers));
        assert_eq!(select_problem("REG99"), Ok(Problem::MutualFollowers));
    }

    #[test]
    fn even_suffix_selects_nth_level() {
        assert_eq!(select_problem("REG12348"), Ok(Problem::NthLevelFollowers));
        assert_eq!(select_problem("REG00"), Ok(Problem::NthLevelFollowers));
    }

    #[test]
    fn every_two_digit_suffix_is_deterministic() {
        for value in 0..100 {
            let reg_no = format!("REG1{value:02}");
            let expected = if value % 2 == 1 {
                Problem::MutualFollowers
            } else {
                Problem::NthLevelFollowers
            };
            assert_eq!(select_problem(&reg_no), Ok(expected), "{reg_no}");
            assert_eq!(select_problem(&reg_no), select_problem(&reg_no));
        }
    }

    #[test]
    fn leading_zero_suffix() {
        assert_eq!(select_problem("REG05"), Ok(Problem::MutualFollowers));
        assert_eq!(select_problem("REG08"), Ok(Problem::NthLevelFollowers));
    }

    #[test]
    fn exactly_two_characters() {
        assert_eq!(select_problem("13"), Ok(Problem::MutualFollowers));
    }

    #[test]
    fn too_short() {
        assert_eq!(select_problem("7"), Err(SelectorError::TooShort("7".into())));
        assert_eq!(select_problem(""), Err(SelectorError::TooShort(String::new())));
    }

    #[test]
    fn non_numeric_suffix() {
        assert_eq!(
            select_problem("REG1A"),
            Err(SelectorError::NotNumeric {
                reg_no: "REG1A".into(),
                suffix: "1A".into(),
            })
        );
        assert!(select_problem("REG 4").is_err());
    }
}
