//! Подсветка Python-кода, который возвращает бэкенд.
//!
//! Результат — HTML: исходник экранирован, токены обёрнуты в
//! `<span class="code-…">`. Стили классов лежат в `styles/app.css`.

const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

const BUILTINS: &[&str] = &[
    "abs", "all", "any", "bool", "dict", "enumerate", "filter", "float", "format", "int",
    "isinstance", "len", "list", "map", "max", "min", "open", "print", "range", "round",
    "set", "sorted", "str", "sum", "tuple", "type", "zip", "self",
];

/// Highlight Python source as HTML
pub fn highlight_python(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(code.len() * 2);
    let mut i = 0;
    let mut line_start = true;

    while i < len {
        let ch = chars[i];

        if ch == '#' {
            let end = find_line_end(&chars, i);
            push_span(&mut out, "code-comment", &collect(&chars, i, end));
            i = end;
            continue;
        }

        if ch == '"' || ch == '\'' {
            let end = scan_string(&chars, i);
            push_span(&mut out, "code-string", &collect(&chars, i, end));
            i = end;
            line_start = false;
            continue;
        }

        if ch == '@' && line_start {
            let mut end = i + 1;
            while end < len && (chars[end].is_alphanumeric() || is_dotted_ident(chars[end])) {
                end += 1;
            }
            push_span(&mut out, "code-decorator", &collect(&chars, i, end));
            i = end;
            line_start = false;
            continue;
        }

        if ch.is_ascii_digit() {
            let mut end = i + 1;
            while end < len && (chars[end].is_ascii_alphanumeric() || is_dotted_ident(chars[end])) {
                end += 1;
            }
            push_span(&mut out, "code-number", &collect(&chars, i, end));
            i = end;
            line_start = false;
            continue;
        }

        if ch.is_alphabetic() || ch == '_' {
            let mut end = i + 1;
            while end < len && (chars[end].is_alphanumeric() || chars[end] == '_') {
                end += 1;
            }
            let word = collect(&chars, i, end);

            // Префикс строки: r"...", f'...', rb"..."
            if end < len && (chars[end] == '"' || chars[end] == '\'') && is_string_prefix(&word) {
                let str_end = scan_string(&chars, end);
                push_span(&mut out, "code-string", &collect(&chars, i, str_end));
                i = str_end;
                line_start = false;
                continue;
            }

            if KEYWORDS.contains(&word.as_str()) {
                push_span(&mut out, "code-keyword", &word);
            } else if BUILTINS.contains(&word.as_str()) {
                push_span(&mut out, "code-builtin", &word);
            } else {
                out.push_str(&html_escape(&word));
            }
            i = end;
            line_start = false;
            continue;
        }

        if ch == '\n' {
            line_start = true;
        } else if !ch.is_whitespace() {
            line_start = false;
        }
        out.push_str(&html_escape(ch.encode_utf8(&mut [0; 4])));
        i += 1;
    }

    out
}

fn is_string_prefix(word: &str) -> bool {
    word.len() <= 2
        && word
            .chars()
            .all(|c| matches!(c.to_ascii_lowercase(), 'r' | 'b' | 'u' | 'f'))
}

/// Index one past the closing quote (or end of input for unclosed strings)
fn scan_string(chars: &[char], start: usize) -> usize {
    let len = chars.len();
    let quote = chars[start];
    let triple = start + 2 < len && chars[start + 1] == quote && chars[start + 2] == quote;
    let mut i = if triple { start + 3 } else { start + 1 };

    while i < len {
        let ch = chars[i];
        if ch == '\\' {
            i += 2;
            continue;
        }
        if triple {
            if ch == quote && i + 2 < len && chars[i + 1] == quote && chars[i + 2] == quote {
                return i + 3;
            }
        } else if ch == quote {
            return i + 1;
        } else if ch == '\n' {
            // Однострочная строка не переносится
            return i;
        }
        i += 1;
    }
    len
}

fn is_dotted_ident(c: char) -> bool {
    c == '_' || c == '.'
}

fn find_line_end(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|&c| c == '\n')
        .map(|p| start + p)
        .unwrap_or(chars.len())
}

fn collect(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end.min(chars.len())].iter().collect()
}

fn push_span(out: &mut String, class: &str, text: &str) {
    out.push_str("<span class=\"");
    out.push_str(class);
    out.push_str("\">");
    out.push_str(&html_escape(text));
    out.push_str("</span>");
}

/// Simple HTML escape
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
