use comfy_table::{ContentArrangement, Table};

use lr_core::time::window_of;
use lr_core::{Branch, Element, Palace};

pub fn run() -> Result<(), String> {
    let mut branches = Table::new();
    branches.set_content_arrangement(ContentArrangement::Dynamic);
    branches.set_header(vec!["Branch", "Hours", "Element", "Polarity", "Beast"]);
    for b in Branch::all() {
        let w = window_of(*b);
        branches.add_row(vec![
            format!("{b} {}", b.pinyin()),
            format!("{:02}-{:02}", w.start, w.end),
            format!("{} {}", b.element(), b.element().english()),
            format!("{} {}", b.polarity().chinese(), b.polarity()),
            format!("{} {}", b.beast(), b.beast().english()),
        ]);
    }

    let mut palaces = Table::new();
    palaces.set_content_arrangement(ContentArrangement::Dynamic);
    palaces.set_header(vec!["#", "Palace", "Element"]);
    for p in Palace::all() {
        palaces.add_row(vec![
            p.position().to_string(),
            format!("{p} {}", p.english()),
            format!("{} {}", p.element(), p.element().english()),
        ]);
    }

    let mut elements = Table::new();
    elements.set_content_arrangement(ContentArrangement::Dynamic);
    elements.set_header(vec!["Element", "Generates", "Overcomes"]);
    for e in Element::all() {
        elements.add_row(vec![
            format!("{e} {}", e.english()),
            format!("{} {}", e.generates(), e.generates().english()),
            format!("{} {}", e.overcomes(), e.overcomes().english()),
        ]);
    }

    println!("{branches}");
    println!();
    println!("{palaces}");
    println!();
    println!("{elements}");

    Ok(())
}
