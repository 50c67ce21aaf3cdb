/// Layout and navigation lines that carry no ship data.
pub fn is_boilerplate(line: &str) -> bool {
    const PREFIXES: &[&str] = &[
        "<title>",
        "<meta",
        "<link rel=\"stylesheet\"",
        "<!",
        "<style type",
        "<input name=",
        "<table",
        "<div ",
        "<hr ",
        "</",
        "<td class=\"noBorderX\"><a class=\"tooltip forschinfo\"",
    ];
    const EXACT: &[&str] = &[
        "<body>",
        "<tbody><tr>",
        "<br>",
        "<tr>",
        "<a class=\"tooltip forschinfo\" href=\"#\">",
        "<a href=\"#\" class=\"forschinfo tooltip\">",
        "<span class=\"ttcontent\">",
    ];

    line.is_empty()
        || line.ends_with("<head>")
        || line.ends_with(" -->")
        || line.ends_with("Modulsteckplätze")
        || PREFIXES.iter().any(|p| line.starts_with(p))
        || EXACT.contains(&line)
        || (line.starts_with("<td ") && line.chars().count() < 50)
        || line.contains("info.gif")
        || line.contains("parent.")
}
