use shadow_rs::ShadowBuilder;

fn main() {
    // Embeds git and build info for `notify-sim --version`
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
