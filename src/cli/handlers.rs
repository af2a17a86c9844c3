use std::{
    io::{Write, stdout},
    time::Instant,
};

use crate::{
    core::{
        bounds::terminal_width,
        color::{AnsiCode, COLOR_NAMES, colorize},
        config::Config,
        digit::parse_digits,
        error::LcdError,
    },
    render::Renderer,
};

use super::parse::DisplayArgs;

pub fn display(a: &DisplayArgs) -> Result<(), LcdError> {
    let t_validate = Instant::now();

    // config
    let mut b = Config::builder()
        .height(&a.size)
        .color_opt(a.color.as_deref());
    if let Some(cols) = a.width {
        b = b.wrap(cols);
    } else if a.wrap {
        b = b.wrap(terminal_width());
    }
    let cfg = b.build()?;

    // validate every digit before drawing anything
    let digits = parse_digits(a.digits.as_deref().unwrap_or_default())?;
    let dur_validate = t_validate.elapsed().as_micros();
    log::info!(
        "rendering {} digit(s) at size {}{}",
        digits.len(),
        cfg.height,
        cfg.wrap
            .map(|w| format!(", wrapped to {w} columns"))
            .unwrap_or_default()
    );

    // render + write
    let t_render = Instant::now();
    let text = Renderer::new(cfg).render_text(&digits);
    let dur_render = t_render.elapsed().as_micros();

    let t_write = Instant::now();
    let mut out = stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    let dur_write = t_write.elapsed().as_micros();

    log::debug!(
        "validate {dur_validate} µs   render {dur_render} µs   write {dur_write} µs   ({} bytes)",
        text.len()
    );
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for name in COLOR_NAMES {
        if let Ok(c) = AnsiCode::from_name(name) {
            println!("{}", colorize(&c, name));
        }
    }
    println!(
        "{}  (#6048c1 or any other #RRGGBB)\n",
        colorize(&AnsiCode::Rgb(0x60, 0x48, 0xc1), "#6048c1")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "lcd";
    println!(
        "
Example invocations
-------------------
• Default size      : {bin} 012345
• Smallest size     : {bin} -s 1 6789
• Big digits        : {bin} -s 5 42
• Named color       : {bin} --color amber 1234
• Hex color         : {bin} --color #6048c1 1234
• Fit the terminal  : {bin} --wrap 3141592653589793238462643383279
• Fixed wrap width  : {bin} --width 40 -s 3 0123456789
• Timing details    : {bin} --debug 8675309
"
    );
}
