use leptos::*;

pub fn star_string(notation: i32) -> String {
    let filled = notation.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn StarRating(notation: i32) -> impl IntoView {
    view! {
        <span class="text-amber-500" aria-label=format!("{} out of 5", notation.clamp(0, 5))>
            {star_string(notation)}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_string_clamps_notation() {
        assert_eq!(star_string(3), "★★★☆☆");
        assert_eq!(star_string(0), "☆☆☆☆☆");
        assert_eq!(star_string(7), "★★★★★");
        assert_eq!(star_string(-1), "☆☆☆☆☆");
    }
}
