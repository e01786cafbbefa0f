//! HTML rendering.
//!
//! Each page is a single self-contained document: inline CSS, no scripts, no
//! external assets. All interpolated text goes through `escape_html`.

use crate::view::{DateSection, GameCard, PageView, TableView};

const GAMECENTER_URL: &str = "https://www.nhl.com/gamecenter";

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem;color:#111}\
h1{font-size:1.6rem}h2{font-size:1.2rem}h3{font-size:1rem;margin:0}\
.description{color:#555;margin:.25rem 0}\
.date-head{display:flex;justify-content:space-between;align-items:center;\
border-top:1px solid #ddd;margin-top:2rem;padding-top:1rem}\
.played{color:#555;font-size:.85rem}\
.card{display:flex;justify-content:space-between;align-items:center;\
border:1px solid #eee;border-radius:.5rem;box-shadow:0 1px 3px rgba(0,0,0,.08);\
padding:1rem;margin:.75rem 0}\
.card a{color:inherit;text-decoration:none}\
.goal{color:#666;font-size:.85rem;margin:.2rem 0}\
.score{font-size:1.1rem;color:#333}\
table{border-collapse:collapse;margin:1rem 0}\
caption{text-align:left;font-weight:600;padding-bottom:.25rem}\
th,td{border:1px solid #ddd;padding:.3rem .6rem;text-align:left}";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a complete HTML document for one page view.
pub fn render_page(page: &PageView) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\"/>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>\n\
         <title>{title}</title>\n\
         <style>{STYLE}</style>\n\
         </head>\n<body>\n<h1>{title}</h1>\n",
        title = escape_html(page.title),
    ));

    for line in &page.description {
        html.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape_html(line)
        ));
    }

    for table in &page.tables {
        render_table(&mut html, table);
    }

    for section in &page.sections {
        render_date_section(&mut html, section);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_table(html: &mut String, table: &TableView) {
    html.push_str(&format!(
        "<table>\n<caption>{}</caption>\n<thead><tr>",
        escape_html(table.caption)
    ));
    for col in table.columns {
        html.push_str(&format!("<th>{}</th>", escape_html(col)));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
}

fn render_date_section(html: &mut String, section: &DateSection) {
    html.push_str("<section>\n<div class=\"date-head\">");
    html.push_str(&format!("<h2>{}</h2>", escape_html(&section.date)));
    if !section.played.is_empty() {
        html.push_str("<div class=\"played\">Games played: ");
        let counts: Vec<String> = section
            .played
            .iter()
            .map(|(team, n)| format!("{}: {}", escape_html(team), n))
            .collect();
        html.push_str(&counts.join(" · "));
        html.push_str("</div>");
    }
    html.push_str("</div>\n");
    for game in &section.games {
        render_game_card(html, game);
    }
    html.push_str("</section>\n");
}

fn render_game_card(html: &mut String, game: &GameCard) {
    html.push_str(&format!(
        "<div class=\"card\">\n<div>\n\
         <a href=\"{GAMECENTER_URL}/{id}\" target=\"_blank\" rel=\"noreferrer noopener\">\
         <h3>{title}</h3></a>\n",
        id = game.id,
        title = escape_html(&game.title),
    ));
    for goal in &game.goals {
        let players: Vec<String> = goal
            .players
            .iter()
            .map(|(name, emphasized)| {
                if *emphasized {
                    format!("<strong>{}</strong>", escape_html(name))
                } else {
                    escape_html(name)
                }
            })
            .collect();
        html.push_str(&format!(
            "<p class=\"goal\">{} {} - {}</p>\n",
            escape_html(&goal.period),
            escape_html(&goal.time),
            players.join(", "),
        ));
    }
    html.push_str(&format!(
        "</div>\n<span class=\"score\">{}</span>\n</div>\n",
        escape_html(&game.score)
    ));
}
