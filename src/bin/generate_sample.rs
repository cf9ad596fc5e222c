use anyhow::{Context, Result};

/// Rows for the sample dataset: name, country, type, elevation (m),
/// latitude, longitude. A few rows are deliberately incomplete so the
/// cleaning step has something to drop.
const ROWS: &[[&str; 6]] = &[
    ["Fuji", "Japan", "Stratovolcano", "3776", "35.36", "138.73"],
    ["Sakurajima", "Japan", "Stratovolcano", "1117", "31.58", "130.65"],
    ["Asama", "Japan", "Complex volcano", "2568", "36.40", "138.53"],
    ["Aso", "Japan", "Caldera", "1592", "32.88", "131.10"],
    ["Bandai", "Japan", "Stratovolcano", "1816", "37.60", "140.08"],
    ["Etna", "Italy", "Stratovolcano", "3329", "37.75", "14.99"],
    ["Vesuvius", "Italy", "Complex volcano", "1281", "40.82", "14.43"],
    ["Stromboli", "Italy", "Stratovolcano", "924", "38.79", "15.21"],
    ["Cotopaxi", "Ecuador", "Stratovolcano", "5911", "-0.68", "-78.44"],
    ["Chimborazo", "Ecuador", "Stratovolcano", "6267", "-1.47", "-78.82"],
    ["Hekla", "Iceland", "Stratovolcano", "1491", "63.98", "-19.70"],
    ["Katla", "Iceland", "Subglacial volcano", "1512", "63.63", "-19.05"],
    ["St. Helens", "United States", "Stratovolcano", "2549", "46.20", "-122.18"],
    ["Rainier", "United States", "Stratovolcano", "4392", "46.85", "-121.76"],
    ["Kilauea", "United States", "Shield volcano", "1222", "19.42", "-155.29"],
    // Incomplete rows: missing elevation, latitude, country.
    ["Krakatau", "Indonesia", "Caldera", "", "-6.10", "105.42"],
    ["Mauna Loa", "United States", "Shield volcano", "4170", "", "-155.61"],
    ["Erebus", "", "Stratovolcano", "3794", "-77.53", "167.17"],
];

fn main() -> Result<()> {
    let output_path = "volcanoes.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer
        .write_record([
            "Volcano Name",
            "Country",
            "Type",
            "Elevation (Meters)",
            "Latitude",
            "Longitude",
        ])
        .context("writing header")?;

    for row in ROWS {
        writer.write_record(row).context("writing row")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} rows to {output_path}", ROWS.len());
    Ok(())
}
