/// FormTable — HTML Report
///
/// Renders the sorted form table as a standalone, mobile-responsive HTML
/// document. Presentation classes are attached while the cells are built,
/// and the colour script takes its cell indices from the same column list
/// the renderer walks, so no index is ever maintained twice.

use form_engine::FormRow;
use tracing::debug;

/// Element id the colour script looks the table up by.
pub const TABLE_ID: &str = "formTable";

// Display order of the report columns. The leading rank column the table
// emits is not listed here; rendered_index accounts for it.
const COLUMNS: [&str; 12] = [
    "Team", "Position", "P", "W", "D", "L", "F", "A", "GD", "Pts", "Form", "Form_Points",
];

// Columns suppressed on narrow portrait screens.
const HIDE_MOBILE: [&str; 7] = ["P", "W", "D", "L", "F", "A", "GD"];

const STYLE: &str = r#"      body {
        font-family: Garamond, serif;
      }
      h1, h2 {
        text-align: left;
      }
      table {
        border-collapse: collapse;
        width: 100%;
        font-family: Garamond, serif;
      }
      th, td {
        border: 1px solid #ddd;
        padding: 8px;
        text-align: center;
      }
      tr:nth-child(even) {
        background-color: #f2f2f2;
      }
      th {
        background-color: #f4f4f4;
        color: black;
        font-weight: bold;
      }
      /* Text in the "Team" column reads better ragged-right */
      .team {
        text-align: left;
      }
      @media only screen and (max-width: 1000px) and (orientation: portrait) {
        .hide-mobile {
          display: none;
        }
        th, td {
          font-size: calc(2.5vw + 1em);
          padding: 10px;
        }
        h1 {
          font-size: 80px;
        }
        h2 {
          font-size: 40px;
        }
      }
      /* Form_Points only feeds the colour script, never the eye */
      table tr th:last-child,
      table tr td:last-child {
        display: none;
      }
"#;

const COLOUR_SCRIPT: &str = r#"    <script>
      // Red at 0 form points fading to green at 18, clamped both ways
      function getColorBasedOnPoints(points) {
        const red = Math.min(255, Math.max(0, Math.floor((18 - points) * 14)));
        const green = Math.min(255, Math.max(0, Math.floor(points * 14)));
        return `rgb(${red}, ${green}, 0)`;
      }

      document.querySelectorAll('#__TABLE_ID__ tbody tr').forEach(row => {
        const pointsCell = row.cells[__POINTS_CELL__];
        const formCell = row.cells[__FORM_CELL__];
        const points = parseInt(pointsCell.textContent, 10);

        formCell.style.backgroundColor = getColorBasedOnPoints(points);
        formCell.style.color = "white";
      });
    </script>
"#;

/// Rust mirror of the script's colour ramp, kept so the formula has a
/// testable reference implementation on this side of the wire.
pub fn form_colour(points: i64) -> (u8, u8, u8) {
    let red = ((18 - points) * 14).clamp(0, 255) as u8;
    let green = (points * 14).clamp(0, 255) as u8;
    (red, green, 0)
}

/// Render the complete report document for a sorted form table.
pub fn render_report(rows: &[FormRow], league_name: &str, date_string: &str) -> String {
    debug!("Rendering report: {} rows for {league_name}", rows.len());

    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html>\n  <head>\n    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n  </head>\n  <body>\n");
    html.push_str(&format!(
        "    <h1>{}: Form Table</h1>\n",
        escape(league_name)
    ));
    html.push_str(&format!("    <h2>{}</h2>\n", escape(date_string)));
    render_table(&mut html, rows);
    html.push_str(&colour_script());
    html.push_str("  </body>\n</html>\n");
    html
}

fn render_table(html: &mut String, rows: &[FormRow]) {
    html.push_str(&format!("    <table id=\"{TABLE_ID}\">\n"));
    html.push_str("      <thead>\n        <tr>\n          <th></th>\n");
    for column in COLUMNS {
        html.push_str(&format!(
            "          <th{}>{}</th>\n",
            class_attr(column),
            escape(column)
        ));
    }
    html.push_str("        </tr>\n      </thead>\n      <tbody>\n");

    for (rank, row) in rows.iter().enumerate() {
        html.push_str("        <tr>\n");
        html.push_str(&format!("          <th>{}</th>\n", rank + 1));
        for column in COLUMNS {
            html.push_str(&format!(
                "          <td{}>{}</td>\n",
                class_attr(column),
                escape(&cell_value(row, column))
            ));
        }
        html.push_str("        </tr>\n");
    }

    html.push_str("      </tbody>\n    </table>\n");
}

fn colour_script() -> String {
    COLOUR_SCRIPT
        .replace("__TABLE_ID__", TABLE_ID)
        .replace("__FORM_CELL__", &rendered_index("Form").to_string())
        .replace("__POINTS_CELL__", &rendered_index("Form_Points").to_string())
}

/// Cell index as the browser sees it: position in the column list plus one
/// for the leading rank cell.
fn rendered_index(column: &str) -> usize {
    1 + COLUMNS
        .iter()
        .position(|c| *c == column)
        .expect("column is registered")
}

fn class_attr(column: &str) -> &'static str {
    if column == "Team" {
        " class=\"team\""
    } else if HIDE_MOBILE.contains(&column) {
        " class=\"hide-mobile\""
    } else {
        ""
    }
}

fn cell_value(row: &FormRow, column: &str) -> String {
    match column {
        "Team" => row.team.clone(),
        "Position" => row.position.to_string(),
        "P" => row.played.to_string(),
        "W" => row.won.to_string(),
        "D" => row.drawn.to_string(),
        "L" => row.lost.to_string(),
        "F" => row.goals_for.to_string(),
        "A" => row.goals_against.to_string(),
        "GD" => row.goal_difference.to_string(),
        "Pts" => row.points.to_string(),
        "Form" => row.form.clone(),
        "Form_Points" => row.form_points.to_string(),
        other => unreachable!("unknown report column {other}"),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(team: &str, form: &str, form_points: u32) -> FormRow {
        FormRow {
            team: team.to_string(),
            position: 1,
            played: 10,
            won: 6,
            drawn: 2,
            lost: 2,
            goals_for: 18,
            goals_against: 9,
            goal_difference: 9,
            points: 20,
            form: form.to_string(),
            form_points,
        }
    }

    #[test]
    fn colour_ramp_boundaries() {
        assert_eq!(form_colour(0), (252, 0, 0));
        assert_eq!(form_colour(18), (0, 252, 0));
        assert_eq!(form_colour(9), (126, 126, 0));
    }

    #[test]
    fn colour_ramp_clamps_above_eighteen() {
        // 21 points would be a negative red channel without the lower clamp
        assert_eq!(form_colour(21), (0, 255, 0));
    }

    #[test]
    fn script_indices_follow_the_column_list() {
        let script = colour_script();
        assert!(script.contains("row.cells[11]"));
        assert!(script.contains("row.cells[12]"));
        assert!(script.contains(&format!("#{TABLE_ID} tbody tr")));
    }

    #[test]
    fn header_cells_carry_presentation_classes() {
        let html = render_report(&[row("Arsenal", "WWDLWD", 11)], "Test League", "01-01-2026");
        assert!(html.contains("<th class=\"team\">Team</th>"));
        for label in HIDE_MOBILE {
            assert!(html.contains(&format!("<th class=\"hide-mobile\">{label}</th>")));
        }
        // Pts, Form and Form_Points stay visible on mobile
        assert!(html.contains("<th>Pts</th>"));
        assert!(html.contains("<th>Form</th>"));
    }

    #[test]
    fn data_cells_mirror_the_header_classes() {
        let html = render_report(&[row("Arsenal", "WWDLWD", 11)], "Test League", "01-01-2026");
        assert!(html.contains("<td class=\"team\">Arsenal</td>"));
        assert_eq!(html.matches("<td class=\"hide-mobile\">").count(), 7);
        assert!(html.contains("<td>WWDLWD</td>"));
        assert!(html.contains("<td>11</td>"));
    }

    #[test]
    fn team_names_are_escaped() {
        let html = render_report(
            &[row("Brighton & Hove Albion", "DDDDDD", 6)],
            "League <A & B>",
            "01-01-2026",
        );
        assert!(html.contains("Brighton &amp; Hove Albion"));
        assert!(html.contains("League &lt;A &amp; B&gt;: Form Table"));
        assert!(!html.contains("Brighton & Hove"));
    }

    #[test]
    fn rank_column_restarts_at_one() {
        let html = render_report(
            &[row("Arsenal", "WWWWWW", 18), row("Villa", "LLLLLL", 0)],
            "Test League",
            "01-01-2026",
        );
        let tbody = html.split("<tbody>").nth(1).unwrap();
        assert!(tbody.contains("<th>1</th>"));
        assert!(tbody.contains("<th>2</th>"));
    }
}
