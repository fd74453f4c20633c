//! Text summary of a divination, the payload handed to an interpreter.

use chrono::Timelike;

use crate::config::Language;
use crate::divination::Divination;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the summary of a divination in the given language.
pub fn render(divination: &Divination, language: Language) -> String {
    match language {
        Language::Chinese => render_chinese(divination),
        Language::English => render_english(divination),
    }
}

fn clock(divination: &Divination) -> String {
    let t = divination.cast_at();
    format!("{}:{:02}", t.hour(), t.minute())
}

fn render_chinese(d: &Divination) -> String {
    let landing = d.chart().landing_record();
    let numbers = d.numbers();
    let mut out = String::new();
    out.push_str(&format!("占卜时间：{}\n", d.cast_at().format(TIMESTAMP_FORMAT)));
    out.push_str(&format!("当前时辰：{}时（{}）\n", d.hour_branch(), clock(d)));
    out.push_str(&format!("输入数字：{},{}\n\n", numbers.first, numbers.second));
    out.push_str("最终落宫：\n");
    out.push_str(&format!("{}【第{}宫】\n", landing.palace, landing.position()));
    out.push_str(&format!("地支：{}\n", landing.branch));
    out.push_str(&format!("六兽：{}\n", landing.beast));
    out.push_str(&format!("六亲：{}\n", landing.relation));
    out.push_str(&format!("五行：{}", landing.element));
    out
}

fn render_english(d: &Divination) -> String {
    let landing = d.chart().landing_record();
    let numbers = d.numbers();
    let branch = d.hour_branch();
    let mut out = String::new();
    out.push_str(&format!(
        "Divination time: {}\n",
        d.cast_at().format(TIMESTAMP_FORMAT)
    ));
    out.push_str(&format!(
        "Time branch: {} {} ({})\n",
        branch.pinyin(),
        branch,
        clock(d)
    ));
    out.push_str(&format!(
        "Numbers: {}, {}\n\n",
        numbers.first, numbers.second
    ));
    out.push_str("Landing palace:\n");
    out.push_str(&format!(
        "{} {} (palace {})\n",
        landing.palace.english(),
        landing.palace,
        landing.position()
    ));
    out.push_str(&format!(
        "Branch: {} {}\n",
        landing.branch.pinyin(),
        landing.branch
    ));
    out.push_str(&format!(
        "Beast: {} {}\n",
        landing.beast.english(),
        landing.beast
    ));
    out.push_str(&format!(
        "Relation: {} {}\n",
        landing.relation.english(),
        landing.relation
    ));
    out.push_str(&format!(
        "Element: {} {}",
        landing.element.english(),
        landing.element
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Numbers;
    use chrono::DateTime;

    fn sample() -> Divination {
        let at = DateTime::parse_from_rfc3339("2026-10-18T10:05:00+08:00").unwrap();
        Divination::cast("career", Numbers::new(3, 5), at).unwrap()
    }

    #[test]
    fn chinese_summary() {
        insta::assert_snapshot!(render(&sample(), Language::Chinese), @r"
        占卜时间：2026-10-18 10:05:00
        当前时辰：巳时（10:05）
        输入数字：3,5

        最终落宫：
        大安【第1宫】
        地支：巳
        六兽：朱雀
        六亲：兄弟
        五行：木
        ");
    }

    #[test]
    fn english_summary() {
        insta::assert_snapshot!(render(&sample(), Language::English), @r"
        Divination time: 2026-10-18 10:05:00
        Time branch: Si 巳 (10:05)
        Numbers: 3, 5

        Landing palace:
        Great Peace 大安 (palace 1)
        Branch: Si 巳
        Beast: Vermilion Bird 朱雀
        Relation: Siblings 兄弟
        Element: Wood 木
        ");
    }

    #[test]
    fn single_digit_hour_not_padded() {
        let at = DateTime::parse_from_rfc3339("2026-10-18T09:07:00+08:00").unwrap();
        let d = Divination::cast("love", Numbers::new(1, 1), at).unwrap();
        assert!(render(&d, Language::Chinese).contains("巳时（9:07）"));
    }
}
