//! Output formatting for load sheets, catalogs and envelopes.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use massbalance_lib::{
    AircraftCatalog, AircraftProfile, AxisMode, ChartAxes, EnvelopeBounds, LoadSheet, Point,
    RenderMode,
};

use crate::terminal::ColorPalette;

const LABEL_WIDTH: usize = 20;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-friendly text, colored when the terminal allows it.
    #[default]
    Text,
    /// Uncolored text load sheet.
    Plain,
    /// Pretty-printed JSON.
    Json,
}

/// Serializable view of an aircraft's envelope.
#[derive(Debug, Serialize)]
struct EnvelopeReport<'a> {
    registration: &'a str,
    axis_mode: AxisMode,
    closed: bool,
    vertices: &'a [Point],
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds: Option<EnvelopeBounds>,
    chart: ChartAxes,
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Render a load sheet to stdout.
pub fn render_load_sheet(
    sheet: &LoadSheet,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    write_load_sheet(&mut io::stdout().lock(), sheet, format, palette)
}

pub fn write_load_sheet<W: Write>(
    out: &mut W,
    sheet: &LoadSheet,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, sheet),
        OutputFormat::Plain => {
            let text = sheet
                .render(RenderMode::PlainText)
                .map_err(io::Error::other)?;
            out.write_all(text.as_bytes())
        }
        OutputFormat::Text => write_load_sheet_text(out, sheet, palette),
    }
}

fn write_load_sheet_text<W: Write>(
    out: &mut W,
    sheet: &LoadSheet,
    p: &ColorPalette,
) -> io::Result<()> {
    let name = sheet.title.as_deref().unwrap_or(&sheet.registration);
    writeln!(out, "{}{}{} ({})", p.white_bold, name, p.reset, sheet.registration)?;
    for (label, value) in sheet.rows() {
        writeln!(
            out,
            "  {}{:<width$}{} {}",
            p.gray,
            label,
            p.reset,
            value,
            width = LABEL_WIDTH
        )?;
    }
    writeln!(
        out,
        "\n{}{}{} | Total weight: {:.1} kg",
        p.cyan,
        sheet.axis_reading(),
        p.reset,
        sheet.result.total_weight_kg
    )?;

    let tag = if sheet.within_limits() {
        p.tag_ok
    } else {
        p.tag_alert
    };
    writeln!(out, "{} {} {}", tag, sheet.status_label(), p.reset)?;

    if let Some(manual) = &sheet.flight_manual {
        writeln!(out, "{}Flight manual: {}{}", p.gray, manual, p.reset)?;
    }
    Ok(())
}

/// Render the catalog listing to stdout.
pub fn render_catalog(catalog: &AircraftCatalog, format: OutputFormat) -> io::Result<()> {
    write_catalog(&mut io::stdout().lock(), catalog, format)
}

pub fn write_catalog<W: Write>(
    out: &mut W,
    catalog: &AircraftCatalog,
    format: OutputFormat,
) -> io::Result<()> {
    let profiles = catalog.profiles_sorted();
    if format == OutputFormat::Json {
        return write_json(out, &profiles);
    }

    if profiles.is_empty() {
        return writeln!(out, "No aircraft available in catalog.");
    }

    writeln!(out, "Available aircraft ({}):", profiles.len())?;
    writeln!(
        out,
        "{:<12} {:>14} {:<8} {}",
        "Registration", "Empty (kg)", "Axis", "Title"
    )?;
    for profile in profiles {
        writeln!(
            out,
            "{:<12} {:>14.1} {:<8} {}",
            profile.registration,
            profile.empty_weight_kg,
            profile.axis_mode,
            profile.title.as_deref().unwrap_or("-")
        )?;
    }
    Ok(())
}

/// Render an aircraft envelope to stdout.
pub fn render_envelope(profile: &AircraftProfile, format: OutputFormat) -> io::Result<()> {
    write_envelope(&mut io::stdout().lock(), profile, format)
}

pub fn write_envelope<W: Write>(
    out: &mut W,
    profile: &AircraftProfile,
    format: OutputFormat,
) -> io::Result<()> {
    let report = EnvelopeReport {
        registration: &profile.registration,
        axis_mode: profile.axis_mode,
        closed: profile.envelope.is_closed(),
        vertices: profile.envelope.vertices(),
        bounds: profile.envelope.bounds(),
        chart: profile.chart_axes(),
    };
    if format == OutputFormat::Json {
        return write_json(out, &report);
    }

    writeln!(
        out,
        "Envelope for {} ({} vertices, x axis: {}):",
        report.registration,
        report.vertices.len(),
        report.chart.x_label
    )?;
    for (index, vertex) in report.vertices.iter().enumerate() {
        writeln!(out, "{:>3}: x = {:>8.3}  weight = {:>6.1} kg", index, vertex.x, vertex.y)?;
    }
    if let Some(bounds) = report.bounds {
        writeln!(
            out,
            "Extent: x {:.3}..{:.3}, weight {:.1}..{:.1} kg",
            bounds.min_x, bounds.max_x, bounds.min_y, bounds.max_y
        )?;
    }
    writeln!(
        out,
        "Chart range: x {}..{}, weight {}..{} kg",
        report.chart.x.min, report.chart.x.max, report.chart.y.min, report.chart.y.max
    )
}
