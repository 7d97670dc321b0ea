use crate::{
    effects::{
        pose::enter_progress,
        state::{EvalCtx, Extras, VisualState},
    },
    foundation::math::lerp,
    scene::model::{AnimationTiming, CountupParams},
};

pub(crate) fn countup(p: &CountupParams, anim: &AnimationTiming, ctx: &EvalCtx) -> VisualState {
    let t = enter_progress(anim, ctx);
    let value = lerp(p.from, p.to, t);
    let text = format!(
        "{}{}{}",
        p.prefix,
        format_number(value, p.decimals, &p.separator),
        p.suffix
    );
    VisualState::visible().with_extras(Extras::Countup { value, text })
}

/// Fixed-decimal formatting with a thousands separator on the integer part.
///
/// ```
/// use motionframe::effects::countup::format_number;
/// assert_eq!(format_number(1234567.891, 2, ","), "1,234,567.89");
/// assert_eq!(format_number(-0.001, 0, ","), "0");
/// ```
pub fn format_number(value: f64, decimals: u32, separator: &str) -> String {
    let fixed = format!("{:.*}", decimals as usize, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits = int_part.len();
    let mut out = String::with_capacity(fixed.len() + digits / 3 * separator.len() + 1);
    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/countup.rs"]
mod tests;
