use super::item::CarouselItem;

/// Built-in testimonials shown when no items file is given.
pub fn sample_items() -> Vec<CarouselItem> {
    [
        (
            "photo-1",
            "Mouse",
            "Just feels right",
            "Our team swapped every trackpad for these and nobody asked to switch back.",
        ),
        (
            "photo-2",
            "Keyboard",
            "Type in style",
            "Quiet switches, solid frame, and the battery outlasted our release cycle.",
        ),
        (
            "photo-3",
            "Monitor",
            "Looks like a win",
            "Colour accuracy good enough that design review stopped arguing about hex codes.",
        ),
        (
            "photo-4",
            "Chair",
            "Back pain no more",
            "Eight-hour days without the afternoon slump. Worth every cent.",
        ),
        (
            "photo-5",
            "Lights",
            "Maybe too bright",
            "The video calls look great; the neighbours have opinions.",
        ),
        (
            "photo-6",
            "Desk",
            "Stand up straight",
            "Sit, stand, repeat. The motor is quiet enough for calls.",
        ),
        (
            "photo-7",
            "Headphones",
            "Noise-cancelling",
            "Open office, closed ears. I finally shipped the migration.",
        ),
        (
            "photo-8",
            "Webcam",
            "Looking sharp",
            "Autofocus that keeps up with how much I talk with my hands.",
        ),
        (
            "photo-9",
            "Microphone",
            "Hear me loud",
            "Podcast-grade audio for stand-ups nobody asked to be podcast-grade.",
        ),
        (
            "photo-10",
            "Dock",
            "One cable",
            "Laptop in, three screens and ethernet up. That's the whole review.",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(idx, (image, category, title, description))| {
        CarouselItem::new(
            idx as u64 + 1,
            format!("https://images.example.com/testimonials/{image}.jpg"),
            category,
            title,
            description,
        )
    })
    .collect()
}
