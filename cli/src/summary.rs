use streakmap_core::{monthly_totals, ContributionGraph};
use tabled::settings::Style;
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Contributions")]
    count: u64,
}

pub fn show_summary(graph: Option<&ContributionGraph>) {
    let Some(graph) = graph else {
        println!("No contribution data available.");
        return;
    };

    let rows: Vec<MonthRow> = monthly_totals(graph)
        .into_iter()
        .map(|m| MonthRow {
            month: format!("{} {}", m.name, m.year),
            count: m.count,
        })
        .collect();

    if rows.is_empty() {
        println!("No dated cells in the grid.");
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(total) = graph.total {
        println!("Total (from source): {}", total);
    }
}
