//! Which code governs an offence, by date.
//!
//! The BNS 2023 replaced the IPC (and the BNSS replaced the CrPC) on
//! 1 July 2024. Offences committed on or after that date are charged under
//! the new code; earlier offences stay under the old one.

use chrono::NaiveDate;

use crate::statute::Code;

pub const TRANSITION_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 7, 1) {
    Some(date) => date,
    None => panic!("invalid transition date"),
};

/// The code under which an offence committed on `offence_date` is charged.
///
/// `code` may be either side of a transition pair. Codes outside any pair
/// (POCSO, IT Act) are returned unchanged.
pub fn governing_code(code: Code, offence_date: NaiveDate) -> Code {
    if offence_date >= TRANSITION_DATE {
        code.successor().unwrap_or(code)
    } else {
        code.predecessor().unwrap_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn transition_day_uses_new_code() {
        assert_eq!(governing_code(Code::Ipc, TRANSITION_DATE), Code::Bns);
        assert_eq!(governing_code(Code::Bns, TRANSITION_DATE), Code::Bns);
    }

    #[test]
    fn day_before_uses_old_code() {
        let eve = date(2024, 6, 30);
        assert_eq!(governing_code(Code::Bns, eve), Code::Ipc);
        assert_eq!(governing_code(Code::Ipc, eve), Code::Ipc);
        assert_eq!(governing_code(Code::Bnss, eve), Code::Crpc);
    }

    #[test]
    fn unpaired_codes_unchanged() {
        assert_eq!(governing_code(Code::Pocso, date(2020, 1, 1)), Code::Pocso);
        assert_eq!(governing_code(Code::ItAct, date(2025, 1, 1)), Code::ItAct);
    }
}
