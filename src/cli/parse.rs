use waypath_core::format::OutputFormat;
use waypath_core::search::Strategy;

/// An edge given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: i64,
    pub to: i64,
    /// Explicit cost, or the graph's default edge cost
    pub cost: Option<u64>,
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse search strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

/// Parse an edge from `FROM:TO` or `FROM:TO:COST`
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (from, to, cost) = match parts.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, cost] => (*from, *to, Some(*cost)),
        _ => return Err(format!("invalid edge '{}' (expected FROM:TO or FROM:TO:COST)", s)),
    };

    let vertex = |v: &str| {
        v.trim()
            .parse::<i64>()
            .map_err(|_| format!("invalid vertex '{}' in edge '{}'", v, s))
    };
    let cost = cost
        .map(|c| {
            c.trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid cost '{}' in edge '{}' (expected a non-negative integer)", c, s))
        })
        .transpose()?;

    Ok(EdgeSpec {
        from: vertex(from)?,
        to: vertex(to)?,
        cost,
    })
}
