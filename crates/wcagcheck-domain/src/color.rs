//! CSS colour parsing and the WCAG luminance / contrast formulas.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 0.0 (fully transparent) ..= 1.0
    pub a: f64,
}

pub const WHITE: Rgba = Rgba {
    r: 255,
    g: 255,
    b: 255,
    a: 1.0,
};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unparsable color: {0:?}")]
pub struct ColorParseError(pub String);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// WCAG 2.x relative luminance of the sRGB colour. Alpha is ignored.
    pub fn relative_luminance(&self) -> f64 {
        fn channel(c: u8) -> f64 {
            let c = f64::from(c) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }
}

/// `(L1 + 0.05) / (L2 + 0.05)` with `L1` the lighter colour. Always `>= 1.0`.
pub fn contrast_ratio(a: &Rgba, b: &Rgba) -> f64 {
    let la = a.relative_luminance();
    let lb = b.relative_luminance();
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Parse the colour syntaxes a computed style can carry: hex, `rgb()`/`rgba()`,
/// `hsl()`/`hsla()` (comma or space separated, optional `/ alpha`), `transparent` and every
/// CSS named colour.
pub fn parse_color(input: &str) -> Result<Rgba, ColorParseError> {
    let value = input.trim().to_ascii_lowercase();
    let err = || ColorParseError(input.to_string());

    if let Some(hex) = value.strip_prefix('#') {
        let (r, g, b, a) =
            cssparser::color::parse_hash_color(hex.as_bytes()).map_err(|()| err())?;
        return Ok(Rgba {
            r,
            g,
            b,
            a: f64::from(a),
        });
    }

    if let Some((name, args)) = value.split_once('(') {
        let args = args.strip_suffix(')').ok_or_else(err)?;
        let parts = function_args(args).ok_or_else(err)?;
        return match name.trim_end() {
            "rgb" | "rgba" => from_rgb_args(&parts),
            "hsl" | "hsla" => from_hsl_args(&parts),
            _ => None,
        }
        .ok_or_else(err);
    }

    if value == "transparent" {
        return Ok(Rgba {
            r: 0,
            g: 0,
            b: 0,
            a: 0.0,
        });
    }

    let (r, g, b) = cssparser::color::parse_named_color(&value).map_err(|()| err())?;
    Ok(Rgba::rgb(r, g, b))
}

/// Split `1, 2, 3, 0.5` or `1 2 3 / 50%` into three or four components.
fn function_args(args: &str) -> Option<Vec<&str>> {
    let (channels, slash_alpha) = match args.split_once('/') {
        Some((c, a)) => (c, Some(a.trim())),
        None => (args, None),
    };
    let mut parts: Vec<&str> = if channels.contains(',') {
        channels.split(',').map(str::trim).collect()
    } else {
        channels.split_whitespace().collect()
    };
    if let Some(a) = slash_alpha {
        if parts.len() != 3 {
            return None;
        }
        parts.push(a);
    }
    if (parts.len() == 3 || parts.len() == 4) && parts.iter().all(|p| !p.is_empty()) {
        Some(parts)
    } else {
        None
    }
}

fn from_rgb_args(parts: &[&str]) -> Option<Rgba> {
    let r = parse_channel(parts[0])?;
    let g = parse_channel(parts[1])?;
    let b = parse_channel(parts[2])?;
    let a = match parts.get(3) {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };
    Some(Rgba { r, g, b, a })
}

fn from_hsl_args(parts: &[&str]) -> Option<Rgba> {
    let hue = parse_hue(parts[0])?;
    let sat = parse_percentage(parts[1])?;
    let light = parse_percentage(parts[2])?;
    let a = match parts.get(3) {
        Some(a) => parse_alpha(a)?,
        None => 1.0,
    };
    let (r, g, b) = hsl_to_rgb(hue, sat, light);
    Some(Rgba { r, g, b, a })
}

/// CSS Color 4 `hsl()` to sRGB. `hue` in degrees, `sat` and `light` in `0..=1`.
fn hsl_to_rgb(hue: f64, sat: f64, light: f64) -> (u8, u8, u8) {
    let hue = hue.rem_euclid(360.0);
    let f = |n: f64| {
        let k = (n + hue / 30.0) % 12.0;
        let a = sat * light.min(1.0 - light);
        light - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    (to_u8(f(0.0)), to_u8(f(8.0)), to_u8(f(4.0)))
}

fn parse_channel(v: &str) -> Option<u8> {
    let n = match v.strip_suffix('%') {
        Some(p) => finite(p)? * 255.0 / 100.0,
        None => finite(v)?,
    };
    Some(n.round().clamp(0.0, 255.0) as u8)
}

fn parse_alpha(v: &str) -> Option<f64> {
    let a = match v.strip_suffix('%') {
        Some(p) => finite(p)? / 100.0,
        None => finite(v)?,
    };
    Some(a.clamp(0.0, 1.0))
}

fn parse_hue(v: &str) -> Option<f64> {
    if let Some(d) = v.strip_suffix("deg") {
        return finite(d);
    }
    if let Some(t) = v.strip_suffix("turn") {
        return Some(finite(t)? * 360.0);
    }
    if let Some(r) = v.strip_suffix("rad") {
        return Some(finite(r)?.to_degrees());
    }
    finite(v)
}

// Legacy `hsl()` requires the `%`; the modern space syntax allows a bare number.
fn parse_percentage(v: &str) -> Option<f64> {
    let n = match v.strip_suffix('%') {
        Some(p) => finite(p)?,
        None => finite(v)?,
    };
    Some((n / 100.0).clamp(0.0, 1.0))
}

fn finite(v: &str) -> Option<f64> {
    v.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_supported_syntaxes() {
        assert_eq!(parse_color("#fff").unwrap(), WHITE);
        assert_eq!(parse_color("#FFFFFF").unwrap(), WHITE);
        assert_eq!(parse_color("rgb(255, 255, 255)").unwrap(), WHITE);
        assert_eq!(parse_color("white").unwrap(), WHITE);
        assert_eq!(parse_color("rgb(100% 100% 100%)").unwrap(), WHITE);
        let c = parse_color("rgba(0, 0, 0, 0)").unwrap();
        assert!(c.is_transparent());
        let c = parse_color("rgb(10 20 30 / 50%)").unwrap();
        assert_eq!((c.r, c.g, c.b), (10, 20, 30));
        assert!((c.a - 0.5).abs() < 1e-9);
        assert!(parse_color("transparent").unwrap().is_transparent());
        let c = parse_color("#0000ff80").unwrap();
        assert_eq!((c.r, c.g, c.b), (0, 0, 255));
        assert!((c.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn hsl_converts_to_rgb() {
        assert_eq!(parse_color("hsl(0, 0%, 100%)").unwrap(), WHITE);
        assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(parse_color("hsl(120deg 100% 25%)").unwrap(), Rgba::rgb(0, 128, 0));
        assert_eq!(parse_color("hsl(240, 100%, 50%)").unwrap(), Rgba::rgb(0, 0, 255));
        assert_eq!(parse_color("HSL(0.5turn, 100%, 50%)").unwrap(), Rgba::rgb(0, 255, 255));
        let c = parse_color("hsla(0, 0%, 0%, 0.25)").unwrap();
        assert_eq!((c.r, c.g, c.b), (0, 0, 0));
        assert!((c.a - 0.25).abs() < 1e-9);
        let c = parse_color("hsl(0 0% 0% / 0%)").unwrap();
        assert!(c.is_transparent());
    }

    #[test]
    fn every_css_named_colour_is_known() {
        assert_eq!(parse_color("rebeccapurple").unwrap(), Rgba::rgb(102, 51, 153));
        assert_eq!(parse_color("DarkSlateGray").unwrap(), Rgba::rgb(47, 79, 79));
        assert_eq!(parse_color("darkslategrey").unwrap(), Rgba::rgb(47, 79, 79));
        assert_eq!(parse_color("papayawhip").unwrap(), Rgba::rgb(255, 239, 213));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_color("banana").is_err());
        assert!(parse_color("#12").is_err());
        assert!(parse_color("rgb(1, 2)").is_err());
        assert!(parse_color("rgb(1, 2, 3").is_err());
        assert!(parse_color("#zzzzzz").is_err());
        assert!(parse_color("hsl(0, 0%)").is_err());
        assert!(parse_color("hsl(red, 0%, 0%)").is_err());
        assert!(parse_color("color-mix(in srgb, red, blue)").is_err());
        assert!(parse_color("rgb(1 2 3 4 / 1)").is_err());
    }

    #[test]
    fn black_on_white_is_twenty_one_to_one() {
        let ratio = contrast_ratio(&Rgba::rgb(0, 0, 0), &WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn identical_colours_are_one_to_one() {
        let ratio = contrast_ratio(&WHITE, &WHITE);
        assert_eq!(format!("{ratio:.2}"), "1.00");
    }

    #[test]
    fn ratio_is_symmetric() {
        let a = Rgba::rgb(119, 119, 119);
        let b = Rgba::rgb(250, 240, 230);
        assert_eq!(contrast_ratio(&a, &b), contrast_ratio(&b, &a));
    }

    #[test]
    fn mid_grey_on_white_matches_published_value() {
        // #777 on white is the classic 4.48:1 example.
        let ratio = contrast_ratio(&Rgba::rgb(0x77, 0x77, 0x77), &WHITE);
        assert_eq!(format!("{ratio:.2}"), "4.48");
    }
}
