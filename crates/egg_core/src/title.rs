//! Decorative window titles.

const TITLE_PREFIX: &str = "EGG: ";

const TITLE_ENDINGS: &[&str] = &[
    "Also try 'vscode'!",
    "Also try 'lite-xl'!",
    "Did you mean 'krox-editor'?",
    "How can I eat cheese without a knife?",
    "I'm a teapot",
    "We're a teapot",
    "Welcome to the Matrix",
    "What's the difference between a dog and a cat?",
    "Quick brown fox jumps over the lazy dog",
    "How to center a div?",
    "A mango yeets a orange (?!?!)",
    "Manuals are a teapot",
    "Mans are a teapot",
    "I love cheese",
    "I like cats",
    "Spaghetti is a teapot",
    "Spaghetti <3",
    "I kinda like spaghetti tbh",
    "programming is a teapot",
    "unix is a teapot",
    "posix is a teapot",
    "windows is not a teapot",
    "minix 3 is not safe from being a teapot",
    "universe is a teapot (except for windows)",
    "how to make a teapot",
    "how to make a teapot out of a teapot",
    "how to make a teapot out of a teapot out of a teapot",
    "i promise no more teapots",
    "i promise no more teapots out of teapots",
    "i promise no more teapots out of teapots out of teapots",
];

pub fn title_endings() -> &'static [&'static str] {
    TITLE_ENDINGS
}

/// Title built from the ending at `index`, wrapping around the pool.
pub fn title_for(index: usize) -> String {
    format!("{TITLE_PREFIX}{}", TITLE_ENDINGS[index % TITLE_ENDINGS.len()])
}

pub fn random_title() -> String {
    title_for(rand::random::<u32>() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_carry_the_egg_prefix() {
        assert_eq!(title_for(0), "EGG: Also try 'vscode'!");
        assert!(random_title().starts_with("EGG: "));
    }

    #[test]
    fn index_wraps_around_the_pool() {
        let len = title_endings().len();
        assert_eq!(len, 30);
        assert_eq!(title_for(len), title_for(0));
        assert_eq!(title_for(len + 4), "EGG: I'm a teapot");
    }

    #[test]
    fn random_title_comes_from_the_pool() {
        for _ in 0..20 {
            let title = random_title();
            let ending = title.strip_prefix(TITLE_PREFIX).expect("prefix");
            assert!(title_endings().contains(&ending));
        }
    }
}
