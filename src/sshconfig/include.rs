/// The `Include` line for `include_path`.
pub fn include_directive(include_path: &str) -> String {
	format!("Include {include_path}")
}

fn is_include(line: &str) -> bool {
	line.trim().starts_with("Include ")
}

fn is_substantive(line: &str) -> bool {
	let trimmed = line.trim();
	!trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Ensure the primary SSH config includes `include_path`.
///
/// Returns `None` when the directive is already present. Otherwise returns the
/// new file content with exactly one directive added:
/// - right after the first run of existing `Include` lines,
/// - else before the first non-blank, non-comment line,
/// - else at the top of the file.
///
/// A missing file (`primary` is `None`) becomes just the directive.
pub fn ensure_include(primary: Option<&str>, include_path: &str) -> Option<String> {
	let directive = include_directive(include_path);

	let Some(text) = primary else {
		return Some(format!("{directive}\n"));
	};

	if text.lines().any(|line| line.trim() == directive) {
		return None;
	}

	let lines: Vec<&str> = text.split('\n').collect();
	let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 1);
	let mut added = false;

	for (i, &line) in lines.iter().enumerate() {
		if added {
			out.push(line);
			continue;
		}

		if is_include(line) {
			out.push(line);
			if !lines.get(i + 1).is_some_and(|next| is_include(next)) {
				out.push(&directive);
				added = true;
			}
		} else if is_substantive(line) {
			out.push(&directive);
			out.push(line);
			added = true;
		} else {
			out.push(line);
		}
	}

	if !added {
		out.insert(0, &directive);
	}

	Some(out.join("\n"))
}
