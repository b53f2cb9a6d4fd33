pub struct NextDateCase {
    pub date: &'static str,
    pub repeat: &'static str,
    /// `None` when the engine must reject the input.
    pub expected: Option<&'static str>,
}

const fn case(date: &'static str, repeat: &'static str, expected: &'static str) -> NextDateCase {
    NextDateCase {
        date,
        repeat,
        expected: Some(expected),
    }
}

const fn rejected(date: &'static str, repeat: &'static str) -> NextDateCase {
    NextDateCase {
        date,
        repeat,
        expected: None,
    }
}

/// Reference cases evaluated against `now = 20240126`.
pub fn next_date_cases() -> Vec<NextDateCase> {
    vec![
        rejected("20240126", ""),
        rejected("20240126", "k 34"),
        rejected("20240126", "ooo"),
        rejected("15000156", "y"),
        rejected("ooo", "y"),
        case("16890220", "y", "20240220"),
        case("20250701", "y", "20260701"),
        case("20240101", "y", "20250101"),
        case("20231231", "y", "20241231"),
        case("20240229", "y", "20250301"),
        case("20240301", "y", "20250301"),
        rejected("20240113", "d"),
        case("20240113", "d 7", "20240127"),
        case("20240120", "d 20", "20240209"),
        case("20240202", "d 30", "20240303"),
        rejected("20240320", "d 401"),
        case("20231225", "d 12", "20240130"),
        case("20240228", "d 1", "20240229"),
        case("20231106", "w 7", "20240128"),
        case("20240126", "w 1,4,5", "20240129"),
        case("20230126", "w 7,1,2", "20240128"),
        rejected("20230226", "w 8,4,5"),
        case("20231107", "m 13", "20240213"),
        rejected("20240120", "m 40,11,19"),
        case("20240116", "m 16,5", "20240205"),
        case("20240126", "m 25,26,7", "20240207"),
        case("20240409", "m 31", "20240531"),
        case("20240329", "m 10,17 12,8,1", "20240810"),
        case("20230311", "m 07,19 05,6", "20240507"),
        case("20230311", "m 1 1,2", "20240201"),
        case("20240127", "m -1", "20240131"),
        case("20240222", "m -2", "20240228"),
        rejected("20240222", "m -2,-3"),
        case("20240326", "m -1,-2", "20240330"),
        case("20240201", "m -1,18", "20240218"),
    ]
}
