use custom_error::custom_error;

custom_error! {
    #[derive(Clone, PartialEq)]
    pub EvalError

    IdentifierNotFound{name: String} = "cannot resolve '{name}' as it does not exist",
    AlreadyDeclared{name: String} = "cannot declare '{name}' as it is already defined in this scope",
    ConstantReassignment{name: String} = "cannot assign to '{name}' as it was declared constant",
    InvalidAssignmentTarget{target: String} = "invalid left-hand side in assignment: {target}",
    UnsupportedNode{kind: &'static str} = "{kind} nodes cannot be evaluated yet",
}
