//! Usage scenarios of the containers together, as a user of the data structures would write them.
