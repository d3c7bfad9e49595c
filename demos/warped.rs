//! Write `warped.html` showing base colormaps next to warped ones.
//!
//! Run with `cargo run --example warped`.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGBA8;
use warpcmap::{cmaps, warp, ColorRange, ColorTable, WarpParams};

type Err = Box<dyn Error>;

fn css_string(c: RGBA8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, table: &ColorTable,
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in table.to_rgba8() {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("warped.html")?);
    let prog = env::args().next().unwrap_or_default();
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>warpcmap: {prog}</title>\n\
                  </head>\n\
                  <body>")?;

    writeln!(fh, "<h3>Base colormaps</h3>")?;
    for name in cmaps::names() {
        let base: ColorTable = cmaps::get(name)?.sample(256).into();
        table_of_colors(&mut fh, &base, 1, name)?;
    }

    writeln!(fh, "<h3>jet warped to z</h3>")?;
    for z in [0.2, 0.5, 0.8] {
        for beta in [0.5, 1., 3., 5.] {
            let table = warp("jet", z, beta, 256)?;
            table_of_colors(&mut fh, &table, 1,
                            &format!("z = {z}, beta = {beta}"))?;
        }
    }

    writeln!(fh, "<h3>Data in (100, 120), middle color at 116</h3>")?;
    let data: Vec<f64> = (0 ..= 200).map(|i| 100. + 0.1 * i as f64).collect();
    let norm = WarpParams::new().cmap("seismic").vmid(116.).beta(3.)
        .resolve(&data)?;
    let colors: ColorTable = data.iter().map(|&v| norm.rgb(v)).collect();
    table_of_colors(&mut fh, &colors, 2,
                    &format!("alpha = {:.4}", norm.warp().alpha()))?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
