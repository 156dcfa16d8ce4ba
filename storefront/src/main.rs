fn main() {
    storefront::mount();
}
