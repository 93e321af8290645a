use crate::completion::CompletionMap;
use crate::models::ListCategory;
use std::fmt::Write;

pub fn render_index(lists: &[(ListCategory, CompletionMap)]) -> String {
    let mut sections = String::new();
    for (list, map) in lists {
        render_list(&mut sections, list, map);
    }
    INDEX_HTML.replace("{{LISTS}}", &sections)
}

fn render_list(out: &mut String, list: &ListCategory, map: &CompletionMap) {
    let progress = map.progress(&list.item_ids());
    let key = escape(&list.key);
    let state = if progress.is_complete() { " done" } else { "" };

    let _ = write!(
        out,
        r#"<section class="list{state}" id="{key}">
      <header>
        <h2>{title}</h2>
        <div class="actions">
          <form method="post" action="/list/{key}/mark-all"><button type="submit" title="وضع علامة مكتمل للكل">✓</button></form>
          <form method="post" action="/list/{key}/reset"><button type="submit" title="إعادة تعيين التقدم">↺</button></form>
        </div>
      </header>
      <div class="bar"><span style="width: {percent}%"></span></div>
      <p class="count">{completed} / {total}</p>
      <ul>
"#,
        title = escape(&list.title),
        percent = progress.percent(),
        completed = progress.completed,
        total = progress.total,
    );

    for item in &list.items {
        let checked = if map.is_completed(&item.id) { " checked" } else { "" };
        let reference = item
            .reference
            .as_deref()
            .map(|r| format!(" · {}", escape(r)))
            .unwrap_or_default();
        let _ = write!(
            out,
            r#"        <li class="item{checked}">
          <form method="post" action="/list/{key}/toggle/{id}">
            <button type="submit">
              <span class="text">{text}</span>
              <span class="meta">×{count}{reference}</span>
            </button>
          </form>
        </li>
"#,
            id = escape(&item.id),
            text = escape(&item.text),
            count = item.count,
        );
    }

    if list.items.is_empty() {
        out.push_str("        <li class=\"empty\">لا توجد أذكار في هذه الفئة.</li>\n");
    }
    out.push_str("      </ul>\n    </section>\n");
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ar" dir="rtl">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>زاد - أذكار اليوم والليلة</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #22302b;
      --muted: #6b7570;
      --accent: #2f7d5b;
      --card: #ffffff;
      --shadow: 0 12px 32px rgba(34, 48, 43, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Amiri", "Noto Naskh Arabic", serif;
      padding: 24px 16px 48px;
    }

    main {
      width: min(720px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    h1 {
      text-align: center;
      color: var(--accent);
      margin: 0;
    }

    .subtitle {
      text-align: center;
      color: var(--muted);
      margin: 4px 0 0;
    }

    .list {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .list header {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .list h2 {
      margin: 0;
      color: var(--accent);
    }

    .list.done h2::after {
      content: " ✓";
    }

    .actions {
      display: flex;
      gap: 6px;
    }

    .actions button {
      border: none;
      background: transparent;
      color: var(--accent);
      font-size: 1.2rem;
      cursor: pointer;
    }

    .bar {
      height: 8px;
      background: #e4e9e6;
      border-radius: 999px;
      overflow: hidden;
      margin: 14px 0 4px;
    }

    .bar span {
      display: block;
      height: 100%;
      background: var(--accent);
    }

    .count {
      text-align: center;
      color: var(--muted);
      margin: 0 0 12px;
      font-size: 0.9rem;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .item button {
      width: 100%;
      text-align: right;
      border: 1px solid #dfe5e1;
      border-radius: 12px;
      background: #fbfcfb;
      padding: 14px;
      font: inherit;
      font-size: 1.15rem;
      line-height: 1.9;
      cursor: pointer;
      display: grid;
      gap: 6px;
    }

    .item.checked button {
      background: #e8f3ed;
      border-color: var(--accent);
      color: var(--muted);
    }

    .meta {
      font-size: 0.85rem;
      color: var(--muted);
    }

    .empty {
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main>
    <div>
      <h1>زاد - أذكار اليوم والليلة</h1>
      <p class="subtitle">مهام يومية بسيطة لأذكارك الصحيحة</p>
    </div>
{{LISTS}}
  </main>
</body>
</html>
"#;
