use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use launchboard::binding::RenderTarget;
use launchboard::dataset::{Dataset, Outcome};
use launchboard::derive::{ProportionChart, ScatterChart};
use launchboard::filter::FilterState;
use launchboard::layout::site_options;
use strum::IntoEnumIterator;

fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Success => Color::Green,
        Outcome::Failure => Color::Red,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn print_site_options(dataset: &Dataset) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
        Cell::new("Launches"),
    ]);

    for opt in site_options(dataset) {
        let launches = if opt.value == opt.label {
            dataset.site_count(&opt.value)
        } else {
            dataset.len()
        };
        table.add_row(vec![
            Cell::new(opt.label),
            Cell::new(opt.value),
            Cell::new(launches).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
}

pub fn print_dataset_summary(dataset: &Dataset, state: &FilterState) {
    println!(
        "📂 {} records, {} sites, {} successes",
        dataset.len(),
        dataset.distinct_sites().len(),
        dataset.total_successes()
    );
    println!(
        "⚖️  Payload bounds: {} .. {} kg",
        dataset.min_payload(),
        dataset.max_payload()
    );
    println!(
        "🔎 Filter: site={} payload={} .. {} kg",
        state.site,
        state.payload_range.low(),
        state.payload_range.high()
    );
}

/// Draws charts as terminal tables.
pub struct TableRenderer {
    list_points: bool,
}

impl TableRenderer {
    pub fn new(list_points: bool) -> Self {
        Self { list_points }
    }
}

impl RenderTarget for TableRenderer {
    fn render_proportion(&mut self, chart: &ProportionChart) {
        println!("\n{}", chart.title);
        if chart.is_empty() {
            println!("   (no launches)");
            return;
        }

        let total = chart.total();
        let mut table = new_table();
        table.add_row(vec![
            Cell::new(chart.names_column).add_attribute(Attribute::Bold),
            Cell::new("Count"),
            Cell::new("Share").fg(Color::Cyan),
        ]);
        for slice in &chart.rows {
            let share = if total > 0 {
                slice.value as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            table.add_row(vec![
                Cell::new(&slice.label),
                Cell::new(slice.value).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.1}%", share))
                    .set_alignment(CellAlignment::Right)
                    .fg(Color::Cyan),
            ]);
        }
        println!("{}", table);
    }

    fn render_correlation(&mut self, chart: &ScatterChart) {
        println!("\n{}", chart.title);
        if chart.is_empty() {
            println!("   (no launches in range)");
            return;
        }

        let mut table = new_table();
        let mut header = vec![
            Cell::new(chart.color_column).add_attribute(Attribute::Bold),
            Cell::new("Points"),
        ];
        header.extend(Outcome::iter().map(|o| Cell::new(o).fg(outcome_color(o))));
        table.add_row(header);

        for group in &chart.groups {
            let points: Vec<_> = chart.points_in_group(group).collect();
            let mut row = vec![
                Cell::new(group),
                Cell::new(points.len()).set_alignment(CellAlignment::Right),
            ];
            row.extend(Outcome::iter().map(|o| {
                let n = points.iter().filter(|p| p.outcome == o).count();
                Cell::new(n)
                    .set_alignment(CellAlignment::Right)
                    .fg(outcome_color(o))
            }));
            table.add_row(row);
        }
        println!("{}", table);

        if self.list_points {
            let mut points = new_table();
            points.add_row(vec![
                Cell::new("Row").add_attribute(Attribute::Bold),
                Cell::new(chart.x_column),
                Cell::new(chart.y_column),
                Cell::new(chart.color_column),
            ]);
            for p in &chart.points {
                points.add_row(vec![
                    Cell::new(p.record.0 + 1).set_alignment(CellAlignment::Right),
                    Cell::new(p.payload_mass).set_alignment(CellAlignment::Right),
                    Cell::new(p.outcome.class()).set_alignment(CellAlignment::Center),
                    Cell::new(&p.booster_category),
                ]);
            }
            println!("{}", points);
        }
    }
}
