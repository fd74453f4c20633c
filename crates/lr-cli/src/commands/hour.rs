use chrono::Timelike;
use colored::Colorize;

use lr_core::time::window_of;
use lr_core::{DivinationConfig, resolve_hour};

pub fn run(hour: Option<u32>, utc_offset: Option<i32>) -> Result<(), String> {
    let hour = match hour {
        Some(h) => h,
        None => {
            let mut config = DivinationConfig::default();
            if let Some(offset) = utc_offset {
                config = config.with_utc_offset_hours(offset);
            }
            config.now().hour()
        }
    };

    let branch = resolve_hour(hour).map_err(|e| e.to_string())?;
    let window = window_of(branch);

    println!(
        "  {hour:02}:00 → {} ({}时)",
        branch.pinyin().bold(),
        branch
    );
    println!("  window:   {:02}:00-{:02}:00", window.start, window.end);
    println!(
        "  element:  {} {}",
        branch.element(),
        branch.element().english()
    );
    println!("  polarity: {} {}", branch.polarity().chinese(), branch.polarity());
    println!("  beast:    {} {}", branch.beast(), branch.beast().english());

    Ok(())
}
