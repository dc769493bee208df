use foodify_core::model::{Recipe, User};
use foodify_core::pagination::{PageMarker, Pager};

/// Text form of a pager: `[First] [Prev] 1 … 4 (5) 6 … 10 [Next] [Last]`.
/// Controls that could not be used on the current page are left out.
pub fn pager_line(pager: &Pager) -> String {
    let markers = pager.markers();
    if markers.is_empty() {
        return String::new();
    }

    let mut parts: Vec<String> = Vec::with_capacity(markers.len() + 4);
    if !pager.is_first() {
        parts.push("[First]".into());
        parts.push(format!("[Prev {}]", pager.prev()));
    }
    parts.extend(markers.iter().map(|m| match m {
        PageMarker::Page(p) if *p == pager.current => format!("({})", p),
        PageMarker::Page(p) => p.to_string(),
        PageMarker::Ellipsis => "…".to_string(),
    }));
    if !pager.is_last() {
        parts.push(format!("[Next {}]", pager.next()));
        parts.push(format!("[Last {}]", pager.last()));
    }
    parts.join(" ")
}

pub fn recipe_card(r: &Recipe) -> String {
    format!(
        "#{:<4} {} ({}, {}, {} min)",
        r.id,
        r.name,
        r.cuisine,
        r.difficulty,
        r.total_time_minutes()
    )
}

pub fn recipe_details(r: &Recipe) -> String {
    let mut lines = vec![
        r.name.clone(),
        format!("Cuisine: {}", r.cuisine),
        format!("Difficulty: {}", r.difficulty),
        format!("Servings: {}", r.servings),
        format!("Calories: {}", r.calories_per_serving),
        format!(
            "Time: {} min prep, {} min cook",
            r.prep_time_minutes, r.cook_time_minutes
        ),
    ];
    if let Some(rating) = r.rating {
        lines.push(format!(
            "Rating: {:.1} ({} reviews)",
            rating,
            r.review_count.unwrap_or(0)
        ));
    }
    lines.push(String::new());
    lines.push("Ingredients:".into());
    lines.extend(r.ingredients.iter().map(|i| format!("  - {}", i)));
    lines.push(String::new());
    lines.push("Instructions:".into());
    lines.extend(
        r.instructions
            .iter()
            .enumerate()
            .map(|(n, step)| format!("  {}. {}", n + 1, step)),
    );
    lines.join("\n")
}

pub fn user_card(u: &User) -> String {
    let a = &u.address;
    let mut lines = vec![
        format!(
            "{} @{} [{}]",
            u.full_name(),
            u.username.as_deref().unwrap_or("-"),
            u.role.to_string().to_uppercase()
        ),
        format!(
            "  Email: {}  Phone: {}",
            u.email.as_deref().unwrap_or("-"),
            u.phone.as_deref().unwrap_or("-")
        ),
    ];
    if !a.address.is_empty() {
        lines.push(format!(
            "  {}, {}, {} {}",
            a.address, a.city, a.state_code, a.postal_code
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pager_line_middle() {
        assert_eq!(
            pager_line(&Pager::new(5, 10)),
            "[First] [Prev 4] 1 … 3 4 (5) 6 7 … 10 [Next 6] [Last 10]"
        );
    }

    #[test]
    fn test_pager_line_edges() {
        assert_eq!(pager_line(&Pager::new(1, 5)), "(1) 2 3 … 5 [Next 2] [Last 5]");
        assert_eq!(pager_line(&Pager::new(1, 1)), "(1)");
        assert_eq!(pager_line(&Pager::new(1, 0)), "");
        assert_eq!(
            pager_line(&Pager::new(10, 10)),
            "[First] [Prev 9] 1 … 8 9 (10)"
        );
    }

    #[test]
    fn test_user_card_without_address() {
        let user: User =
            serde_json::from_str(r#"{"id":2,"firstName":"Michael","lastName":"Williams","role":"moderator"}"#)
                .unwrap();
        assert_eq!(user_card(&user), "Michael Williams @- [MODERATOR]\n  Email: -  Phone: -");
    }
}
