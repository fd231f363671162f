//! Value parsers for comma-separated coordinate flags (`--start 0,0,-5`).

use gm::{Vector2, Vector3};

fn parse_coords<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!(
            "expected {} comma-separated numbers, got {}",
            N,
            parts.len()
        ));
    }
    let mut out = [0.0; N];
    for (dst, part) in out.iter_mut().zip(parts) {
        let v: f64 = part.parse().map_err(|e| format!("{part:?}: {e}"))?;
        if !v.is_finite() {
            return Err(format!("{part:?} is not a finite number"));
        }
        *dst = v;
    }
    Ok(out)
}

pub fn parse_vec2(s: &str) -> Result<Vector2<f64>, String> {
    parse_coords::<2>(s).map(Vector2::from)
}

pub fn parse_vec3(s: &str) -> Result<Vector3<f64>, String> {
    parse_coords::<3>(s).map(Vector3::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_and_spaced_coordinates() {
        assert_eq!(parse_vec3("0, 0,-5").unwrap(), Vector3::new(0.0, 0.0, -5.0));
        assert_eq!(parse_vec2("1.5,2e1").unwrap(), Vector2::new(1.5, 20.0));
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!(parse_vec3("1,2").unwrap_err().contains("expected 3"));
        assert!(parse_vec2("1,2,3").is_err());
        assert!(parse_vec2("1,x").is_err());
        assert!(parse_vec3("nan,0,0").unwrap_err().contains("finite"));
    }
}
