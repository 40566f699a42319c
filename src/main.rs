fn main() {
    wordtally::app::startup::startup();
}
