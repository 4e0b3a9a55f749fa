use crate::config::schema::Settings;
use crate::logging::flush_log;

/// Significant digits used for numeric settings
const PRECISION: usize = 2;

/// Render the human-readable summary of `settings`, one entry per log line
#[must_use]
pub fn render(settings: &Settings) -> Vec<String> {
    let upscaling = &settings.upscaling;
    let mut lines = vec![
        "Current configuration:".to_string(),
        format!(
            "  Upscaling ({}) is {}",
            upscaling.method,
            toggle(upscaling.enabled)
        ),
    ];

    if upscaling.enabled {
        lines.push(format!(
            "    * Render scale: {}",
            format_significant(upscaling.render_scale, PRECISION)
        ));
        lines.push(format!(
            "    * Sharpness:    {}",
            format_significant(upscaling.sharpness, PRECISION)
        ));
        lines.push(format!(
            "    * Radius:       {}",
            format_significant(upscaling.radius, PRECISION)
        ));
        lines.push(format!(
            "    * MIP bias:     {}",
            toggle(upscaling.apply_mip_bias)
        ));
    }

    lines.push(format!("  Debug mode is {}", toggle(settings.debug_mode)));
    lines
}

/// Log the summary at info level and force delivery of the output
pub fn log(settings: &Settings) {
    for line in render(settings) {
        tracing::info!("{line}");
    }
    flush_log();
}

const fn toggle(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

/// Format `value` with `digits` significant digits, `%g` style
///
/// Trailing zeros are dropped, and scientific notation is used when the
/// decimal exponent is below -4 or at least `digits`.
#[must_use]
pub fn format_significant(value: f32, digits: usize) -> String {
    let digits = digits.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent is taken after rounding so 9.96 lands on 1.0e1, not 9.96e0
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let max_exponent = i32::try_from(digits).unwrap_or(i32::MAX);

    if exponent < -4 || exponent >= max_exponent {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = usize::try_from(max_exponent - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
