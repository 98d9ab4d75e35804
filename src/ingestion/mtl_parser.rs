//! Material description files.
//!
//! One `token value` directive per line. Only `Ka`, `Kd`, `Ks`, `Ke` and
//! `map_Kd` are understood; everything else is skipped. Numbers are read
//! leniently: a malformed component reads as zero.

use std::fmt::Write as _;
use std::path::Path;

use glam::Vec3;
use tracing::debug;

use crate::types::MaterialParams;

/// Parse the material file at `path` on top of the default parameters.
///
/// An unreadable file yields the defaults; scene overrides may still supply
/// every visual parameter the object needs.
pub fn parse_material_file(path: &Path) -> MaterialParams {
    let mut params = MaterialParams::default();
    match std::fs::read_to_string(path) {
        Ok(src) => parse_material_str(&src, &mut params),
        Err(e) => debug!(path = %path.display(), "Material file unavailable, using defaults: {e}"),
    }
    params
}

/// Apply every recognized directive in `src` to `params`, in line order.
pub fn parse_material_str(src: &str, params: &mut MaterialParams) {
    for line in src.lines() {
        let (token, value) = line.split_once(' ').unwrap_or((line, ""));
        match token {
            "Ka" => params.ambient = parse_color(value),
            "Kd" => params.diffuse = parse_color(value),
            "Ks" => params.specular = parse_color(value),
            "Ke" => {
                let ke = parse_int_prefix(value);
                if ke > 0 {
                    params.emission = Vec3::splat(ke as f32);
                    params.emissive = true;
                }
            }
            "map_Kd" => params.diffuse_map = value.trim_end().to_string(),
            _ => {}
        }
    }
}

/// Render the recognized subset of `params` as material file text.
pub fn write_material_str(params: &MaterialParams) -> String {
    let mut out = String::new();
    let color = |out: &mut String, token: &str, c: Vec3| {
        let _ = writeln!(out, "{token} {} {} {}", c.x, c.y, c.z);
    };
    color(&mut out, "Ka", params.ambient);
    color(&mut out, "Kd", params.diffuse);
    color(&mut out, "Ks", params.specular);
    if params.emissive {
        let _ = writeln!(out, "Ke {}", params.emission.x.round() as i32);
    }
    if params.has_diffuse_map() {
        let _ = writeln!(out, "map_Kd {}", params.diffuse_map);
    }
    out
}

/// Three space-separated components; missing or malformed ones read as 0.
fn parse_color(value: &str) -> Vec3 {
    let mut parts = value.split(' ');
    let mut next = || parts.next().map_or(0.0, parse_float_prefix);
    let r = next();
    let g = next();
    let b = next();
    Vec3::new(r, g, b)
}

/// Longest leading decimal number in `s` (after leading whitespace), else 0.
fn parse_float_prefix(s: &str) -> f32 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Leading integer in `s` (after leading whitespace), else 0.
fn parse_int_prefix(s: &str) -> i32 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return 0;
    }
    s[..sign + digits].parse().unwrap_or(0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
