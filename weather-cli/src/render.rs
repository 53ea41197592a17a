use std::fmt::Write;

use weatherwise_core::{
    Background, Layout, ViewState,
    info::SiteInfo,
    model::WeatherResult,
};

const TITLE: &str = "Weather Wise";
const WIDE_RULE: usize = 48;

/// Render the whole view as text for the current layout.
pub fn render_view(view: &ViewState) -> String {
    let layout = view.layout();
    let mut out = String::new();

    match layout {
        Layout::Wide => {
            let _ = writeln!(out, "{:=^width$}", format!(" {TITLE} "), width = WIDE_RULE);
        }
        Layout::Compact => {
            let _ = writeln!(out, "{TITLE}");
        }
    }

    if let Some(error) = view.error() {
        let _ = writeln!(out, "! {error}");
    }

    if let Some(weather) = view.weather() {
        render_weather(&mut out, weather, layout);
        if view.weekly_forecast_offered() {
            let _ = writeln!(out, "[weekly forecast: not available yet]");
        }
    }

    if let Background::Photo(url) = view.background() {
        let _ = writeln!(out, "Background: {url}");
    }

    out
}

fn render_weather(out: &mut String, weather: &WeatherResult, layout: Layout) {
    let current = &weather.current;
    let _ = writeln!(out, "{}", weather.location.display_name());
    let _ = writeln!(out, "{}°C", current.temp_c);
    if let Some(condition) = &current.condition {
        let _ = writeln!(out, "{}", condition.text);
    }

    let mut details = Vec::new();
    if let Some(feels) = current.feelslike_c {
        details.push(format!("Feels like: {feels}°C"));
    }
    if let Some(humidity) = current.humidity {
        details.push(format!("Humidity: {humidity}%"));
    }
    if let Some(wind) = current.wind_kph {
        details.push(format!("Wind: {wind} kph"));
    }

    match layout {
        Layout::Wide if !details.is_empty() => {
            let _ = writeln!(out, "{}", details.join("  |  "));
        }
        _ => {
            for line in details {
                let _ = writeln!(out, "{line}");
            }
        }
    }
}

pub fn render_info(info: &SiteInfo, layout: Layout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", info.title);
    for (what, source) in info.sources {
        let _ = writeln!(out, "  • {what}: {source}");
    }
    let _ = writeln!(out, "Created by {}", info.author);

    let links: Vec<String> =
        info.links.iter().map(|(label, url)| format!("{label} <{url}>")).collect();
    if layout.is_compact() {
        for link in links {
            let _ = writeln!(out, "  {link}");
        }
    } else {
        let _ = writeln!(out, "  {}", links.join("   "));
    }

    out
}
