use crate::models::{Dialog, GridView, HabitDraft, HabitRow, NoteDraft};
use std::fmt::Write;

pub fn render_index(view: &GridView) -> String {
    INDEX_HTML
        .replace("{{TITLE}}", &escape_html(&view.title))
        .replace("{{GRID}}", &render_table(view))
        .replace("{{NOTES}}", &render_notes(view))
        .replace("{{DIALOG}}", &render_dialog(view))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '{' => escaped.push_str("&#123;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn render_table(view: &GridView) -> String {
    let mut html = String::new();
    html.push_str("<table class=\"grid\">\n<thead>\n<tr>");
    html.push_str("<th rowspan=\"2\" class=\"head\">Habitudes</th>");
    for day in &view.days {
        let _ = write!(
            html,
            "<th class=\"day{}\">{}</th>",
            today_class(day.is_today),
            day.weekday
        );
    }
    html.push_str("<th rowspan=\"2\" class=\"head\">Objectif</th>");
    html.push_str("<th rowspan=\"2\" class=\"head\">Réalisé</th></tr>\n<tr>");
    for day in &view.days {
        let _ = write!(
            html,
            "<th class=\"day{}\">{}</th>",
            today_class(day.is_today),
            day.day
        );
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &view.rows {
        render_row(&mut html, row);
    }
    html.push_str("</tbody>\n</table>");
    html
}

fn render_row(html: &mut String, row: &HabitRow) {
    let _ = write!(html, "<tr><td class=\"name\">{}</td>", escape_html(&row.name));
    for cell in &row.cells {
        let (style, mark) = if cell.checked {
            (format!(" style=\"background:{}\"", row.color), "&#10003;")
        } else {
            (String::new(), "")
        };
        let _ = write!(
            html,
            "<td class=\"cell\"{style}><form method=\"post\" action=\"/toggle\">\
             <input type=\"hidden\" name=\"habit_id\" value=\"{}\" />\
             <input type=\"hidden\" name=\"date\" value=\"{}\" />\
             <button type=\"submit\" class=\"check\" aria-pressed=\"{}\">{mark}</button>\
             </form></td>",
            row.id, cell.date, cell.checked
        );
    }
    let _ = write!(
        html,
        "<td class=\"goal\">{}</td><td class=\"achieved {}\" style=\"background:{}\">{}</td></tr>\n",
        row.goal,
        if row.status.is_met() { "met" } else { "unmet" },
        row.status_color,
        row.achieved
    );
}

fn today_class(is_today: bool) -> &'static str {
    if is_today { " today" } else { "" }
}

fn render_notes(view: &GridView) -> String {
    if view.notes.is_empty() {
        return String::new();
    }
    let mut html = String::from("<ul class=\"notes\">");
    for note in &view.notes {
        let _ = write!(
            html,
            "<li><span class=\"note-date\">{}</span> {}</li>",
            note.date.format("%d/%m"),
            escape_html(&note.text)
        );
    }
    html.push_str("</ul>");
    html
}

fn render_dialog(view: &GridView) -> String {
    match &view.dialog {
        Dialog::Closed => String::new(),
        Dialog::AddHabit(draft) => render_habit_dialog(draft, view.days.len()),
        Dialog::Note(draft) => render_note_dialog(draft, view),
    }
}

fn render_error(error: &Option<String>) -> String {
    match error {
        Some(message) => format!(
            "<p class=\"error\" role=\"alert\">{}</p>",
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn render_habit_dialog(draft: &HabitDraft, days: usize) -> String {
    format!(
        r#"<dialog open>
  <h3>Ajouter une nouvelle habitude</h3>
  {error}
  <form method="post" action="/habits">
    <label>Nouvelle habitude <input type="text" name="name" value="{name}" autofocus /></label>
    <label>Objectif (1-{days}) <input type="number" name="goal" value="{goal}" /></label>
    <div class="dialog-actions">
      <button type="submit" formaction="/habits/cancel">Annuler</button>
      <button type="submit">Ajouter</button>
    </div>
  </form>
</dialog>"#,
        error = render_error(&draft.error),
        name = escape_html(&draft.name),
        goal = escape_html(&draft.goal),
    )
}

fn render_note_dialog(draft: &NoteDraft, view: &GridView) -> String {
    let mut options = String::new();
    for day in &view.days {
        let _ = write!(
            options,
            "<option value=\"{}\"{}>{} {}</option>",
            day.date,
            if day.date == draft.date { " selected" } else { "" },
            day.weekday,
            day.day
        );
    }
    format!(
        r#"<dialog open>
  <h3>Ajouter une note</h3>
  <p class="hint">Écrivez votre note pour la journée sélectionnée.</p>
  {error}
  <form method="post" action="/notes">
    <label>Jour <select name="date">{options}</select></label>
    <label>Note <input type="text" name="text" value="{text}" autofocus /></label>
    <div class="dialog-actions">
      <button type="submit" formaction="/notes/cancel">Annuler</button>
      <button type="submit">Enregistrer</button>
    </div>
  </form>
</dialog>"#,
        error = render_error(&draft.error),
        text = escape_html(&draft.text),
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Suivi des habitudes</title>
  <style>
    :root {
      --ink: #2b2a28;
      --muted: #6b7280;
      --accent: #60a5fa;
      --line: #d1d5db;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      padding: 20px 64px;
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
    }

    h1 {
      margin: 20px 0 40px;
      font-weight: 400;
    }

    .month {
      display: flex;
      justify-content: center;
      align-items: center;
      gap: 4px;
      color: var(--muted);
      margin-bottom: 24px;
    }

    .month form {
      display: inline;
    }

    .month button,
    .check {
      appearance: none;
      border: none;
      background: transparent;
      cursor: pointer;
    }

    .grid {
      border-collapse: collapse;
      font-size: 0.75rem;
      width: 100%;
    }

    .grid th,
    .grid td {
      border: 1px solid var(--line);
      padding: 4px;
      text-align: center;
    }

    .grid .head {
      color: var(--accent);
      border: none;
    }

    .grid .today {
      background: black;
      color: white;
    }

    .grid .name {
      text-align: left;
      padding: 8px 4px;
    }

    .check {
      width: 20px;
      height: 20px;
      font-size: 0.9rem;
    }

    .actions {
      display: flex;
      flex-direction: column;
      align-items: flex-start;
      gap: 16px;
      margin: 16px 0;
    }

    .actions button {
      font-size: 0.9rem;
      cursor: pointer;
    }

    .notes {
      color: var(--muted);
      font-size: 0.85rem;
    }

    .note-date {
      font-weight: 600;
    }

    dialog {
      border: none;
      border-radius: 8px;
      box-shadow: 0 24px 60px rgba(0, 0, 0, 0.2);
      padding: 24px;
      min-width: 320px;
    }

    dialog label {
      display: block;
      margin: 12px 0;
      font-size: 0.85rem;
    }

    dialog input,
    dialog select {
      display: block;
      width: 100%;
      margin-top: 4px;
    }

    .dialog-actions {
      display: flex;
      justify-content: flex-end;
      gap: 8px;
    }

    .error {
      color: #c63b2b;
      font-size: 0.85rem;
    }

    .hint {
      font-size: 0.75rem;
      text-align: center;
    }
  </style>
</head>
<body>
  <h1>Suivi des habitudes</h1>

  <h5 class="month">
    <form method="post" action="/month/prev"><button type="submit" aria-label="Mois précédent">&#9664;</button></form>
    <span id="month-title">{{TITLE}}</span>
    <form method="post" action="/month/next"><button type="submit" aria-label="Mois suivant">&#9654;</button></form>
  </h5>

  {{GRID}}

  <section class="actions">
    <form method="post" action="/habits/new"><button type="submit">+ Nouvelle habitude</button></form>
    <form method="post" action="/notes/new"><button type="submit">Ajouter une note</button></form>
  </section>

  {{NOTES}}

  {{DIALOG}}
</body>
</html>
"#;
