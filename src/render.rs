//! Chart specs -> Plotly figure JSON (`{ data, layout }`).
//!
//! The browser side only has to call `Plotly.react(graphId, figure.data, figure.layout)`.

use crate::derive::{ProportionChart, ScatterChart};
use serde_json::{json, Value};

fn figure_layout(title: &str, extra: Value) -> Value {
    let mut layout = json!({
        "title": { "text": title },
        "template": "plotly",
    });
    if let (Some(base), Value::Object(more)) = (layout.as_object_mut(), extra) {
        base.extend(more);
    }
    layout
}

pub fn proportion_figure(chart: &ProportionChart) -> Value {
    let labels: Vec<&str> = chart.rows.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<u64> = chart.rows.iter().map(|s| s.value).collect();

    json!({
        "data": [{
            "type": "pie",
            "labels": labels,
            "values": values,
            "name": chart.names_column,
        }],
        "layout": figure_layout(&chart.title, json!({ "legend": { "tracegroupgap": 0 } })),
    })
}

pub fn correlation_figure(chart: &ScatterChart) -> Value {
    // One trace per booster category so the legend colours by group
    let traces: Vec<Value> = chart
        .groups
        .iter()
        .map(|group| {
            let (x, y): (Vec<f64>, Vec<u8>) = chart
                .points_in_group(group)
                .map(|p| (p.payload_mass, p.outcome.class()))
                .unzip();
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": group,
                "legendgroup": group,
                "x": x,
                "y": y,
            })
        })
        .collect();

    json!({
        "data": traces,
        "layout": figure_layout(&chart.title, json!({
            "xaxis": { "title": { "text": chart.x_column } },
            "yaxis": { "title": { "text": chart.y_column } },
            "legend": { "title": { "text": chart.color_column } },
        })),
    })
}
