use crate::foundation::core::ChartLayout;

const SUFFIXES: [(u64, char); 3] = [(1_000_000_000, 'B'), (1_000_000, 'M'), (1_000, 'K')];

/// Human-readable tick label: `999`, `1K`, `2.5K`, `25K`, `12.5M`, `1B`.
///
/// Values from one thousand up are divided by the largest fitting unit and keep one
/// truncated decimal digit, dropped when it is zero.
pub fn format_tick_value(value: i64) -> String {
    let magnitude = value.unsigned_abs();
    let sign = if value < 0 { "-" } else { "" };

    for (unit, suffix) in SUFFIXES {
        if magnitude >= unit {
            let whole = magnitude / unit;
            let tenth = (magnitude % unit) / (unit / 10);
            return if tenth == 0 {
                format!("{sign}{whole}{suffix}")
            } else {
                format!("{sign}{whole}.{tenth}{suffix}")
            };
        }
    }
    value.to_string()
}

/// Value represented by axis column `col` when the axis spans `max_value`.
pub fn tick_value(col: usize, max_value: i64, axis_length: usize) -> i64 {
    if axis_length == 0 {
        return 0;
    }
    let v = col as i128 * i128::from(max_value) / axis_length as i128;
    v as i64
}

/// Two-line x-axis: a tick line (`+` on ticks, `-` between, `>` tip) and a value line.
///
/// Ticks sit on column 0 and on every multiple of `(axis_length - 1) / n_ticks`. Each label
/// starts on its tick's column; when the previous label already reaches past that column the
/// label is appended right after it, so crowded axes can print labels back to back.
pub fn build_axis(max_value: i64, layout: &ChartLayout) -> String {
    let max_value = max_value.max(0);
    let axis_length = layout.axis_length.max(1);
    let separation = ((axis_length - 1) / layout.n_ticks.max(1)).max(1);

    let mut out = String::with_capacity(axis_length * 3);
    let mut ticks = vec![(0usize, 0i64)];
    out.push('+');
    for col in 1..axis_length {
        if col % separation == 0 {
            out.push('+');
            ticks.push((col, tick_value(col, max_value, axis_length)));
        } else {
            out.push('-');
        }
    }
    out.push_str(">\n");

    let mut cursor = 0usize;
    for (col, value) in ticks {
        let label = format_tick_value(value);
        let pad = col.saturating_sub(cursor);
        out.extend(std::iter::repeat_n(' ', pad));
        out.push_str(&label);
        cursor += pad + label.len();
    }
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "../../tests/unit/chart/axis.rs"]
mod tests;
