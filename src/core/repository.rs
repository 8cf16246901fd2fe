pub trait Repository<Entity> {
    // appends an entity after all previously added ones
    fn add(&mut self, entity: Entity);

    // returns a copy of every entity in insertion order
    fn all(&self) -> Vec<Entity>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
